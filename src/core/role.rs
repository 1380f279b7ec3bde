//! Roles and per-role data storage.
//!
//! ## Role
//!
//! The two sides of a match. Fixed for the duration of a match.
//!
//! ## RoleMap
//!
//! Fixed-size per-role storage with O(1) indexing by `Role`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Confined to the central column band. Wins by surviving the match.
    Evader,
    /// Roams the full board. Wins by sustaining a lock streak.
    Pursuer,
}

impl Role {
    /// Both roles in move order within a turn.
    pub const ALL: [Role; 2] = [Role::Evader, Role::Pursuer];

    /// The other role.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Role::Evader => Role::Pursuer,
            Role::Pursuer => Role::Evader,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Evader => write!(f, "Evader"),
            Role::Pursuer => write!(f, "Pursuer"),
        }
    }
}

/// Per-role data storage.
///
/// ## Example
///
/// ```
/// use shadow_pursuit::core::{Role, RoleMap};
///
/// let mut wins: RoleMap<u32> = RoleMap::with_value(0);
/// wins[Role::Pursuer] += 1;
/// assert_eq!(wins[Role::Evader], 0);
/// assert_eq!(wins[Role::Pursuer], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    evader: T,
    pursuer: T,
}

impl<T> RoleMap<T> {
    /// Create a RoleMap with values from a factory function.
    pub fn new(factory: impl Fn(Role) -> T) -> Self {
        Self {
            evader: factory(Role::Evader),
            pursuer: factory(Role::Pursuer),
        }
    }

    /// Create a RoleMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a role's data.
    #[must_use]
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Evader => &self.evader,
            Role::Pursuer => &self.pursuer,
        }
    }

    /// Get a mutable reference to a role's data.
    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Evader => &mut self.evader,
            Role::Pursuer => &mut self.pursuer,
        }
    }

    /// Iterate over (Role, &T) pairs in move order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        self.get_mut(role)
    }
}
