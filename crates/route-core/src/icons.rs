//! Icon descriptors
//!
//! Glyphs are chosen once, when fixtures are built, instead of being looked
//! up by string key on every render.

use serde::{Deserialize, Serialize};

/// A glyph used by modes, profiles and saved places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconDescriptor {
    /// Walking
    Footprints,
    /// Cycling
    Bike,
    /// Car
    Car,
    /// Transit
    Train,
    /// Safety-oriented profiles, and the "Parents" favorite
    Heart,
    /// Speed-oriented profiles
    Zap,
    /// Scenic profiles
    Mountain,
    /// Every other profile
    Timer,
    /// Home
    Home,
    /// Work
    Briefcase,
    /// Gym
    Dumbbell,
    /// Generic location
    MapPin,
}

impl IconDescriptor {
    /// Glyph for a route profile id
    pub fn for_profile(profile_id: &str) -> Self {
        match profile_id {
            "safe" => IconDescriptor::Heart,
            "sport" | "fast" => IconDescriptor::Zap,
            "scenic" => IconDescriptor::Mountain,
            _ => IconDescriptor::Timer,
        }
    }

    /// Glyph for a saved place, keyed by the icon name stored with it
    pub fn for_place(key: &str) -> Self {
        match key {
            "home" => IconDescriptor::Home,
            "briefcase" => IconDescriptor::Briefcase,
            "dumbbell" => IconDescriptor::Dumbbell,
            "heart" => IconDescriptor::Heart,
            _ => IconDescriptor::MapPin,
        }
    }

    /// Name of the glyph in the icon set
    pub fn glyph_name(&self) -> &'static str {
        match self {
            IconDescriptor::Footprints => "footprints",
            IconDescriptor::Bike => "bike",
            IconDescriptor::Car => "car",
            IconDescriptor::Train => "train",
            IconDescriptor::Heart => "heart",
            IconDescriptor::Zap => "zap",
            IconDescriptor::Mountain => "mountain",
            IconDescriptor::Timer => "timer",
            IconDescriptor::Home => "home",
            IconDescriptor::Briefcase => "briefcase",
            IconDescriptor::Dumbbell => "dumbbell",
            IconDescriptor::MapPin => "map-pin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_icons() {
        assert_eq!(IconDescriptor::for_profile("safe"), IconDescriptor::Heart);
        assert_eq!(IconDescriptor::for_profile("sport"), IconDescriptor::Zap);
        assert_eq!(IconDescriptor::for_profile("fast"), IconDescriptor::Zap);
        assert_eq!(IconDescriptor::for_profile("scenic"), IconDescriptor::Mountain);
        assert_eq!(IconDescriptor::for_profile("no-tolls"), IconDescriptor::Timer);
    }

    #[test]
    fn test_place_icons_fall_back_to_pin() {
        assert_eq!(IconDescriptor::for_place("dumbbell"), IconDescriptor::Dumbbell);
        assert_eq!(IconDescriptor::for_place("boat"), IconDescriptor::MapPin);
        assert_eq!(IconDescriptor::MapPin.glyph_name(), "map-pin");
    }
}
