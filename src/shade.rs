/// Display colour for a vertex, darkening with its degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DegreeShade {
    Isolated,
    Light,
    Pale,
    Medium,
    Dark,
    Strong,
}

impl DegreeShade {
    const ALL: [DegreeShade; 6] = [
        DegreeShade::Isolated,
        DegreeShade::Light,
        DegreeShade::Pale,
        DegreeShade::Medium,
        DegreeShade::Dark,
        DegreeShade::Strong,
    ];

    /// Degrees of five and above share the strongest shade.
    pub fn for_degree(degree: usize) -> Self {
        Self::ALL[degree.min(Self::ALL.len() - 1)]
    }

    /// The shade as a CSS hex colour.
    pub fn hex(&self) -> &'static str {
        match self {
            DegreeShade::Isolated => "#f3f4f6",
            DegreeShade::Light => "#dbeafe",
            DegreeShade::Pale => "#bfdbfe",
            DegreeShade::Medium => "#93c5fd",
            DegreeShade::Dark => "#60a5fa",
            DegreeShade::Strong => "#3b82f6",
        }
    }
}
