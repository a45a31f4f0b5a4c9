//! Threat assessment.
//!
//! An enemy standing `d` cells away in some relative direction threatens us
//! when its own straight throw of length `d` along its facing would land on
//! our cell. The check is purely geometric: an enemy that merely stands
//! next to us but faces elsewhere is no threat this turn.

use arena_core::{Arena, Rotation};

/// Whether the occupant of the cell `distance` steps away in `rotation`
/// (relative to our facing) would hit us by throwing `distance` cells
/// forward. Empty and off-grid cells are never a threat.
pub fn in_danger(arena: &Arena, rotation: Rotation, distance: u32) -> bool {
    let me = arena.me();
    let Some(enemy) = arena.occupant(me.project(rotation, distance)) else {
        return false;
    };

    let threatened = enemy.reaches(me.position, distance);
    if threatened {
        tracing::trace!(
            enemy = %enemy.id,
            %rotation,
            distance,
            "in line of fire"
        );
    }
    threatened
}

/// Groups of threat checks, each the guard of one cascade rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DangerZone {
    /// Left or Right, distance 1..=3.
    Flank,
    /// Back, distance 3.
    FarRear,
    /// Back, distance 1..=2.
    NearRear,
    /// Front, distance 1..=3.
    Frontal,
}

impl DangerZone {
    pub const ALL: [DangerZone; 4] = [
        DangerZone::Flank,
        DangerZone::FarRear,
        DangerZone::NearRear,
        DangerZone::Frontal,
    ];

    /// `(rotation, distance)` pairs checked for this zone.
    pub const fn checks(self) -> &'static [(Rotation, u32)] {
        match self {
            DangerZone::Flank => &[
                (Rotation::Left, 1),
                (Rotation::Left, 2),
                (Rotation::Left, 3),
                (Rotation::Right, 1),
                (Rotation::Right, 2),
                (Rotation::Right, 3),
            ],
            DangerZone::FarRear => &[(Rotation::Back, 3)],
            DangerZone::NearRear => &[(Rotation::Back, 1), (Rotation::Back, 2)],
            DangerZone::Frontal => &[
                (Rotation::Front, 1),
                (Rotation::Front, 2),
                (Rotation::Front, 3),
            ],
        }
    }

    /// True if any check of this zone reports danger.
    pub fn threatened(self, arena: &Arena) -> bool {
        self.checks()
            .iter()
            .any(|&(rotation, distance)| in_danger(arena, rotation, distance))
    }
}
