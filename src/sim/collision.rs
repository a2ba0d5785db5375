//! Contact detection and resolution
//!
//! Bodies are axis-aligned rectangles. A contact is reported once, when two
//! bodies that test for each other start overlapping. A player/obstacle
//! contact removes the obstacle and nothing else.

use std::collections::BTreeSet;

use super::state::{Body, GameState};
use crate::category;

/// One side of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBody {
    pub id: u32,
    pub category: u32,
}

/// A newly begun overlap between two bodies (`body_a.id < body_b.id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub body_a: ContactBody,
    pub body_b: ContactBody,
}

impl Contact {
    /// Union of both bodies' categories
    pub fn combined_mask(&self) -> u32 {
        self.body_a.category | self.body_b.category
    }

    /// The body in the given category, if either side is
    pub fn body_in(&self, category: u32) -> Option<ContactBody> {
        [self.body_a, self.body_b]
            .into_iter()
            .find(|b| b.category == category)
    }

    fn key(&self) -> (u32, u32) {
        (self.body_a.id, self.body_b.id)
    }
}

impl ContactBody {
    fn new(id: u32, body: &Body) -> Self {
        Self {
            id,
            category: body.category,
        }
    }
}

/// Find overlapping body pairs. Updates `state.active_contacts` and returns
/// only the pairs that were not already overlapping last tick.
///
/// Obstacles only test for the player, so the player is checked against
/// each obstacle in one pass rather than testing every pair.
pub fn detect_contacts(state: &mut GameState) -> Vec<Contact> {
    let player = &state.player;
    let player_rect = player.rect();
    let mut overlapping = BTreeSet::new();
    let mut began = Vec::new();

    for obstacle in &state.obstacles {
        if !player.body.tests_contact_with(&obstacle.body)
            || !player_rect.intersects(&obstacle.rect())
        {
            continue;
        }

        let (a, b) = (
            ContactBody::new(player.id, &player.body),
            ContactBody::new(obstacle.id, &obstacle.body),
        );
        let contact = if a.id < b.id {
            Contact { body_a: a, body_b: b }
        } else {
            Contact { body_a: b, body_b: a }
        };
        if !state.active_contacts.contains(&contact.key()) {
            began.push(contact);
        }
        overlapping.insert(contact.key());
    }

    state.active_contacts = overlapping;
    began
}

/// Handle one begun contact. Returns the id of the removed obstacle, or
/// `None` if the contact does not qualify or the obstacle is already gone.
pub fn resolve_contact(state: &mut GameState, contact: &Contact) -> Option<u32> {
    if contact.combined_mask() != category::PLAYER | category::OBSTACLE {
        return None;
    }

    let obstacle = contact.body_in(category::OBSTACLE)?;
    if !state.remove_obstacle(obstacle.id) {
        return None;
    }

    state.active_contacts.remove(&contact.key());
    log::debug!("Player hit obstacle {}", obstacle.id);
    Some(obstacle.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state_with_obstacle_at(pos: Vec2) -> (GameState, u32) {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let id = state.next_entity_id();
        let tuning = state.tuning.clone();
        state.obstacles.push(Obstacle::new(id, pos, &tuning));
        (state, id)
    }

    #[test]
    fn test_overlap_raises_contact() {
        let (mut state, id) = state_with_obstacle_at(Vec2::ZERO);
        state.player.pos = Vec2::new(20.0, 10.0);

        let contacts = detect_contacts(&mut state);
        assert_eq!(contacts.len(), 1);
        assert_eq!(
            contacts[0].combined_mask(),
            category::PLAYER | category::OBSTACLE
        );
        assert_eq!(contacts[0].body_in(category::OBSTACLE).map(|b| b.id), Some(id));
    }

    #[test]
    fn test_no_contact_when_apart() {
        let (mut state, _) = state_with_obstacle_at(Vec2::new(900.0, 0.0));
        state.player.pos = Vec2::ZERO;
        assert!(detect_contacts(&mut state).is_empty());
    }

    #[test]
    fn test_obstacles_do_not_contact_each_other() {
        let (mut state, _) = state_with_obstacle_at(Vec2::new(900.0, 0.0));
        let id = state.next_entity_id();
        let tuning = state.tuning.clone();
        state
            .obstacles
            .push(Obstacle::new(id, Vec2::new(910.0, 0.0), &tuning));
        assert!(detect_contacts(&mut state).is_empty());
    }

    #[test]
    fn test_stacked_obstacles_only_contact_player() {
        let (mut state, _) = state_with_obstacle_at(Vec2::new(900.0, 0.0));
        let tuning = state.tuning.clone();
        for _ in 0..20_000 {
            let id = state.next_entity_id();
            state
                .obstacles
                .push(Obstacle::new(id, Vec2::new(900.0, 0.0), &tuning));
        }
        state.player.pos = Vec2::new(-900.0, 0.0);
        assert!(detect_contacts(&mut state).is_empty());

        // The player overlapping the whole stack begins one contact per obstacle
        state.player.pos = Vec2::new(900.0, 0.0);
        let contacts = detect_contacts(&mut state);
        assert_eq!(contacts.len(), state.obstacles.len());
        assert!(
            contacts
                .iter()
                .all(|c| c.combined_mask() == category::PLAYER | category::OBSTACLE)
        );
        assert_eq!(state.active_contacts.len(), state.obstacles.len());
    }

    #[test]
    fn test_contact_reported_once_while_overlapping() {
        let (mut state, _) = state_with_obstacle_at(Vec2::ZERO);
        state.player.pos = Vec2::ZERO;
        assert_eq!(detect_contacts(&mut state).len(), 1);
        assert!(detect_contacts(&mut state).is_empty());

        // Separate, then touch again
        state.player.pos.y = 500.0;
        assert!(detect_contacts(&mut state).is_empty());
        state.player.pos.y = 0.0;
        assert_eq!(detect_contacts(&mut state).len(), 1);
    }

    #[test]
    fn test_resolve_removes_obstacle_exactly_once() {
        let (mut state, id) = state_with_obstacle_at(Vec2::ZERO);
        state.player.pos = Vec2::ZERO;
        let player_id = state.player.id;

        let contacts = detect_contacts(&mut state);
        assert_eq!(resolve_contact(&mut state, &contacts[0]), Some(id));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.id, player_id);

        // Replaying the same contact is a no-op
        assert_eq!(resolve_contact(&mut state, &contacts[0]), None);
        assert!(state.active_contacts.is_empty());
    }

    #[test]
    fn test_resolve_ignores_other_masks() {
        let (mut state, id) = state_with_obstacle_at(Vec2::ZERO);
        let contact = Contact {
            body_a: ContactBody {
                id: state.player.id,
                category: category::PLAYER,
            },
            body_b: ContactBody {
                id,
                category: category::OBSTACLE | 1 << 2,
            },
        };
        assert_eq!(resolve_contact(&mut state, &contact), None);
        assert_eq!(state.obstacles.len(), 1);
    }
}
