use std::fmt;
use std::str::FromStr;

/// The wall patterns [`MazeGen`](crate::MazeGen) can produce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MazeType {
    /// No walls at all.
    #[default]
    None,
    /// Independent random walls.
    Random,
    /// Every other column walled, one gap per column.
    VerticalLines,
    /// Every other row walled, one gap per row.
    HorizontalLines,
    /// Vertical and horizontal lines overlaid.
    ComboLines,
    /// A single corridor winding inwards.
    Spiral,
    /// Walls on every cell whose row + col is even.
    Checkerboard,
    /// Concentric diamond rings around the centre.
    Diamonds,
    /// Open space carved by a random walk from the centre.
    Caves,
    /// A perfect maze from a recursive backtracker.
    DfsMaze,
}

impl MazeType {
    /// Every maze type, in menu order.
    pub const ALL: [MazeType; 10] = [
        MazeType::None,
        MazeType::Random,
        MazeType::VerticalLines,
        MazeType::HorizontalLines,
        MazeType::ComboLines,
        MazeType::Spiral,
        MazeType::Checkerboard,
        MazeType::Diamonds,
        MazeType::Caves,
        MazeType::DfsMaze,
    ];

    /// Identifier used for parsing and serialization.
    pub const fn id(self) -> &'static str {
        match self {
            MazeType::None => "none",
            MazeType::Random => "random",
            MazeType::VerticalLines => "verticalLines",
            MazeType::HorizontalLines => "horizontalLines",
            MazeType::ComboLines => "comboLines",
            MazeType::Spiral => "spiral",
            MazeType::Checkerboard => "checkerboard",
            MazeType::Diamonds => "diamonds",
            MazeType::Caves => "caves",
            MazeType::DfsMaze => "dfsMaze",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MazeType::None => "Empty",
            MazeType::Random => "Random",
            MazeType::VerticalLines => "Vertical Lines",
            MazeType::HorizontalLines => "Horizontal Lines",
            MazeType::ComboLines => "Combo Lines",
            MazeType::Spiral => "Spiral",
            MazeType::Checkerboard => "Checkerboard",
            MazeType::Diamonds => "Diamonds",
            MazeType::Caves => "Caves",
            MazeType::DfsMaze => "DFS Maze",
        }
    }

    /// Whether a random start-to-end passage is carved after generation.
    pub const fn carves_path(self) -> bool {
        matches!(
            self,
            MazeType::ComboLines
                | MazeType::Spiral
                | MazeType::Checkerboard
                | MazeType::Diamonds
                | MazeType::Caves
        )
    }

    /// The next maze type in menu order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for MazeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown maze type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMazeTypeError(String);

impl fmt::Display for ParseMazeTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown maze type {:?}", self.0)
    }
}

impl std::error::Error for ParseMazeTypeError {}

impl FromStr for MazeType {
    type Err = ParseMazeTypeError;

    /// Accepts the identifiers from [`MazeType::id`], case-insensitively and
    /// ignoring `-` and `_`, so `dfs-maze` and `DFS_MAZE` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        MazeType::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(&key))
            .ok_or_else(|| ParseMazeTypeError(s.to_string()))
    }
}
