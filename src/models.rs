//! Activity data model
//!
//! Shapes of the JSON documents served by the activities API.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A named extracurricular offering with capacity and schedule.
///
/// The name is not part of the document; it is the key the activity is
/// stored under in an [`ActivityMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: impl Into<String>, schedule: impl Into<String>, max_participants: u32) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder: add a participant
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Capacity minus current participant count.
    ///
    /// Signed: an over-subscribed activity yields a negative number rather
    /// than being clamped.
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityMap {
    entries: Vec<(String, Activity)>,
}

impl ActivityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an activity. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Activity)> for ActivityMap {
    fn from_iter<I: IntoIterator<Item = (K, Activity)>>(iter: I) -> Self {
        let mut map = ActivityMap::new();
        for (name, activity) in iter {
            map.insert(name, activity);
        }
        map
    }
}

impl Serialize for ActivityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ActivityMapVisitor;

        impl<'de> Visitor<'de> for ActivityMapVisitor {
            type Value = ActivityMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<ActivityMap, M::Error> {
                let mut map = ActivityMap {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    map.insert(name, activity);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ActivityMapVisitor)
    }
}

/// Participant detail for a single activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantsView {
    pub activity: String,
    pub count: u32,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Body of a successful signup or unregister
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupReceipt {
    pub message: String,
    #[serde(default)]
    pub spots_left: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_left() {
        let activity = Activity::new("Chess", "Fridays", 2).participant("a@mergington.edu");
        assert_eq!(activity.spots_left(), 1);
        assert!(!activity.is_full());

        let full = activity.participant("b@mergington.edu");
        assert_eq!(full.spots_left(), 0);
        assert!(full.is_full());
    }

    #[test]
    fn test_oversubscribed_is_not_full() {
        let activity = Activity::new("Chess", "Fridays", 1)
            .participant("a@mergington.edu")
            .participant("b@mergington.edu");
        assert_eq!(activity.spots_left(), -1);
        assert!(!activity.is_full());
    }

    #[test]
    fn test_map_keeps_server_order() {
        let json = r#"{
            "Programming Class": {"description": "Code", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "Chess", "schedule": "Fri", "max_participants": 12, "participants": ["michael@mergington.edu"]},
            "Art Studio": {"description": "Paint", "schedule": "Wed", "max_participants": 15, "participants": []}
        }"#;

        let map: ActivityMap = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
        assert_eq!(map.get("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = ActivityMap::new();
        map.insert("A", Activity::new("first", "Mon", 1));
        map.insert("B", Activity::new("second", "Tue", 1));
        map.insert("A", Activity::new("replaced", "Mon", 3));

        assert_eq!(map.len(), 2);
        assert_eq!(map.names().next(), Some("A"));
        assert_eq!(map.get("A").unwrap().description, "replaced");
    }

    #[test]
    fn test_map_serializes_as_object() {
        let map: ActivityMap = [("Gym Class", Activity::new("Sports", "Mon", 30))]
            .into_iter()
            .collect();
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["Gym Class"]["max_participants"], 30);
    }

    #[test]
    fn test_receipt_without_spots_left() {
        let receipt: SignupReceipt = serde_json::from_str(r#"{"message": "Signed up!"}"#).unwrap();
        assert_eq!(receipt.message, "Signed up!");
        assert_eq!(receipt.spots_left, None);
    }
}
