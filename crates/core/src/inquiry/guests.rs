use regex::Regex;

use crate::domain::booking::RoomRequest;

/// Generic person counts above this engage the family-split heuristic.
const FAMILY_SPLIT_THRESHOLD: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CountTarget {
    /// Sets the room count directly.
    Rooms,
    /// Sets the adult count directly.
    Adults,
    /// A generic party size; large parties are split into rooms, adults and
    /// children.
    Party,
}

#[derive(Clone, Debug)]
struct CountRule {
    pattern: Regex,
    target: CountTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuestCounts {
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self { rooms: 1, adults: 2, children: 0 }
    }
}

impl GuestCounts {
    /// Produces the parsed inquiry's room list: `rooms` identical Standard
    /// AC rooms with guests spread by ceiling division, so the last rooms
    /// may be overprovisioned.
    pub fn materialize_rooms(&self) -> Vec<RoomRequest> {
        if self.rooms == 0 {
            return Vec::new();
        }
        let adults_per_room = self.adults.div_ceil(self.rooms);
        let children_per_room = self.children.div_ceil(self.rooms);
        (0..self.rooms)
            .map(|_| RoomRequest::standard(adults_per_room, children_per_room))
            .collect()
    }
}

/// Extracts room and guest counts from an ordered rule table. Rules run in
/// declaration order and later matches override earlier ones; an explicit
/// children mention afterwards overrides whatever the party heuristic
/// derived.
#[derive(Clone, Debug)]
pub struct GuestCountExtractor {
    rules: Vec<CountRule>,
    children_patterns: Vec<Regex>,
}

impl GuestCountExtractor {
    pub fn new() -> Self {
        let rules = vec![
            rule(r"(?i)(\d+)\s*rooms?", CountTarget::Rooms),
            rule(r"(?i)(\d+)\s*adults?", CountTarget::Adults),
            rule(r"(?i)(\d+)\s*people", CountTarget::Party),
            rule(r"(?i)(\d+)\s*persons?", CountTarget::Party),
            rule(r"(?i)(\d+)\s*guests?", CountTarget::Party),
            rule(r"(?i)family\s*of\s*(\d+)", CountTarget::Party),
        ];
        let children_patterns = vec![
            Regex::new(r"(?i)(\d+)\s*(?:child|children|kid|kids)")
                .expect("children count pattern compiles"),
            Regex::new(r"(?i)with\s*(\d+)\s*(?:child|children)")
                .expect("children phrase pattern compiles"),
        ];

        Self { rules, children_patterns }
    }

    pub fn extract(&self, text: &str) -> GuestCounts {
        let mut counts = GuestCounts::default();

        for rule in &self.rules {
            let Some(value) = first_count(&rule.pattern, text) else {
                continue;
            };
            match rule.target {
                CountTarget::Rooms => counts.rooms = value,
                CountTarget::Adults => counts.adults = value,
                CountTarget::Party => {
                    counts.adults = value;
                    if value > FAMILY_SPLIT_THRESHOLD {
                        // Split policy for large parties: one room per three
                        // guests, seventy percent adults, remainder children.
                        counts.rooms = value.div_ceil(3);
                        counts.adults = (u64::from(value) * 7).div_ceil(10) as u32;
                        counts.children = value - counts.adults;
                    }
                }
            }
        }

        for pattern in &self.children_patterns {
            if let Some(value) = first_count(pattern, text) {
                counts.children = value;
                break;
            }
        }

        counts
    }
}

impl Default for GuestCountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn rule(pattern: &str, target: CountTarget) -> CountRule {
    CountRule { pattern: Regex::new(pattern).expect("count pattern compiles"), target }
}

fn first_count(pattern: &Regex, text: &str) -> Option<u32> {
    pattern.captures(text)?.get(1)?.as_str().parse().ok()
}
