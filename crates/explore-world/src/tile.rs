//! Tile data model.

/// Ground type of a single tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Exposed ground
    #[default]
    Bare,
    /// Ground cover (grass patches)
    Cover,
    /// Tree crown; walkable underneath
    TreeCanopy,
    /// Tree trunk; blocks movement
    TreeTrunk,
}

impl TileType {
    /// Returns true if an agent may stand on this tile type.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        match self {
            Self::Bare | Self::Cover | Self::TreeCanopy => true,
            Self::TreeTrunk => false,
        }
    }

    /// Returns true for either part of a tree.
    #[must_use]
    pub const fn is_tree(self) -> bool {
        match self {
            Self::TreeCanopy | Self::TreeTrunk => true,
            Self::Bare | Self::Cover => false,
        }
    }
}

/// A single tile of the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Ground type
    pub kind: TileType,
    /// Whether an agent has stood on this tile
    pub visited: bool,
}

impl Tile {
    /// Creates an unvisited tile of the given type.
    #[must_use]
    pub const fn new(kind: TileType) -> Self {
        Self {
            kind,
            visited: false,
        }
    }

    /// Returns true if an agent may stand on this tile.
    #[must_use]
    pub const fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }

    /// Sets the visited flag. Returns true if it was not set before.
    pub fn visit(&mut self) -> bool {
        !std::mem::replace(&mut self.visited, true)
    }
}

/// Returns true unless the tile is a tree trunk.
#[must_use]
pub const fn is_passable(tile: &Tile) -> bool {
    tile.is_passable()
}
