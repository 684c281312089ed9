//! Channel identifiers and active-channel sets.
//!
//! Color samples are stored as `[R, G, B]`. Hosts refer to channels by short
//! string ids (`"R"`, `"G"`, `"B"`, `"A"`); this module maps them to sample
//! slots and tracks which channels an operation should touch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseChannelError;

/// Number of color slots in a loop sample.
pub const SLOT_COUNT: usize = 3;

/// A color channel identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Red, slot 0.
    R,
    /// Green, slot 1.
    G,
    /// Blue, slot 2.
    B,
    /// Alpha. Reserved: samples carry no alpha slot, so it resolves to slot 0.
    A,
}

impl Channel {
    /// The three channels backed by a sample slot, in slot order.
    pub const RGB: [Self; SLOT_COUNT] = [Self::R, Self::G, Self::B];

    /// Sample slot for this channel.
    ///
    /// Total over every identifier: anything without an RGB slot maps to
    /// slot 0, so the result is always a valid index into a sample.
    pub const fn index(self) -> usize {
        match self {
            Self::R => 0,
            Self::G => 1,
            Self::B => 2,
            Self::A => 0,
        }
    }

    /// Short identifier used by hosts.
    pub const fn id(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
            Self::A => "A",
        }
    }

    /// Parse a host identifier, falling back to [`Channel::R`] for anything
    /// unrecognized.
    pub fn from_id(id: &str) -> Self {
        id.parse().unwrap_or(Self::R)
    }
}

/// Slot index for a channel identifier. Unrecognized ids map to slot 0.
pub fn index_of(id: &str) -> usize {
    Channel::from_id(id).index()
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "R" | "r" => Ok(Self::R),
            "G" | "g" => Ok(Self::G),
            "B" | "b" => Ok(Self::B),
            "A" | "a" => Ok(Self::A),
            other => Err(ParseChannelError(other.to_string())),
        }
    }
}

/// An order-independent set over the RGB channels.
///
/// Alpha has no slot in a sample and is never a member; inserting it is
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Channel>", into = "Vec<Channel>")]
pub struct ChannelSet {
    bits: u8,
}

impl ChannelSet {
    /// No channels.
    pub const EMPTY: Self = Self { bits: 0 };
    /// Red, green and blue.
    pub const RGB: Self = Self { bits: 0b111 };

    const fn bit(channel: Channel) -> u8 {
        match channel {
            Channel::R => 0b001,
            Channel::G => 0b010,
            Channel::B => 0b100,
            Channel::A => 0,
        }
    }

    /// Returns this set with `channel` added.
    #[must_use]
    pub const fn with(self, channel: Channel) -> Self {
        Self {
            bits: self.bits | Self::bit(channel),
        }
    }

    /// Add a channel to the set.
    pub fn insert(&mut self, channel: Channel) {
        self.bits |= Self::bit(channel);
    }

    /// Remove a channel from the set.
    pub fn remove(&mut self, channel: Channel) {
        self.bits &= !Self::bit(channel);
    }

    /// Whether `channel` is a member.
    pub const fn contains(self, channel: Channel) -> bool {
        let bit = Self::bit(channel);
        bit != 0 && self.bits & bit == bit
    }

    /// Whether no channel is selected.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Membership per sample slot, `[R, G, B]`.
    pub const fn slots(self) -> [bool; SLOT_COUNT] {
        [
            self.contains(Channel::R),
            self.contains(Channel::G),
            self.contains(Channel::B),
        ]
    }

    /// Member channels in slot order.
    pub fn iter(self) -> impl Iterator<Item = Channel> {
        Channel::RGB.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Channel> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for channel in iter {
            set.insert(channel);
        }
        set
    }
}

impl From<Vec<Channel>> for ChannelSet {
    fn from(channels: Vec<Channel>) -> Self {
        channels.into_iter().collect()
    }
}

impl From<ChannelSet> for Vec<Channel> {
    fn from(set: ChannelSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for ChannelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for channel in self.iter() {
            f.write_str(channel.id())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_maps_rgb_slots() {
        assert_eq!(Channel::R.index(), 0);
        assert_eq!(Channel::G.index(), 1);
        assert_eq!(Channel::B.index(), 2);
    }

    #[test]
    fn test_unrecognized_id_falls_back_to_red() {
        assert_eq!(index_of("X"), 0);
        assert_eq!(index_of(""), 0);
        assert_eq!(Channel::from_id("purple"), Channel::R);
        assert_eq!(index_of("B"), 2);
    }

    #[test]
    fn test_alpha_has_no_slot_of_its_own() {
        assert_eq!(Channel::A.index(), 0);
        let mut set = ChannelSet::EMPTY;
        set.insert(Channel::A);
        assert!(set.is_empty());
        assert!(!set.contains(Channel::A));
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("g".parse::<Channel>().unwrap(), Channel::G);
        let err = "Q".parse::<Channel>().unwrap_err();
        assert_eq!(err.0, "Q");
    }

    #[test]
    fn test_set_is_order_independent() {
        let a: ChannelSet = [Channel::B, Channel::R].into_iter().collect();
        let b = ChannelSet::EMPTY.with(Channel::R).with(Channel::B);
        assert_eq!(a, b);
        assert_eq!(a.slots(), [true, false, true]);
        assert_eq!(a.to_string(), "RB");
    }

    #[test]
    fn test_set_remove() {
        let mut set = ChannelSet::RGB;
        set.remove(Channel::G);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Channel::R, Channel::B]);
    }

    #[test]
    fn test_set_serializes_as_channel_list() {
        let set = ChannelSet::EMPTY.with(Channel::G).with(Channel::R);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["R","G"]"#);
        let back: ChannelSet = serde_json::from_str(r#"["G","R","G"]"#).unwrap();
        assert_eq!(back, set);
    }
}
