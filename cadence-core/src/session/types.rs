use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A requester, keyed by source address and user agent.
///
/// Identity is the rendered `"{address}:{user_agent}"` string: two pairs that
/// render the same (`("::1", "a:b")` and `("::1:a", "b")`) are one client.
#[derive(Debug, Clone)]
pub struct ClientIdentity {
    address: String,
    user_agent: String,
    key: String,
}

impl ClientIdentity {
    pub fn new(address: impl Into<String>, user_agent: impl Into<String>) -> Self {
        let address = address.into();
        let user_agent = user_agent.into();
        let key = format!("{address}:{user_agent}");
        Self {
            address,
            user_agent,
            key,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn as_key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for ClientIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ClientIdentity {}

impl Hash for ClientIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Seconds since the epoch, as derived from a log timestamp.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RequestTimestamp(pub f64);

impl RequestTimestamp {
    pub fn seconds(self) -> f64 {
        self.0
    }
}

/// Gaps between consecutive requests inside one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub intervals: Vec<f64>,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }
}

impl From<Vec<f64>> for Session {
    fn from(intervals: Vec<f64>) -> Self {
        Self { intervals }
    }
}

impl Serialize for Session {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.intervals.serialize(serializer)
    }
}

/// Map keyed by [`ClientIdentity`] that remembers the order in which clients
/// were first seen.
///
/// Every stage of the pipeline produces one of these, so the three dump files
/// list clients in the same order as the source log.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientMap<T> {
    entries: Vec<(ClientIdentity, T)>,
    index: HashMap<ClientIdentity, usize>,
}

impl<T> Default for ClientMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> ClientMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, client: &ClientIdentity) -> Option<&T> {
        self.index.get(client).map(|&i| &self.entries[i].1)
    }

    /// Returns the value for `client`, inserting `T::default()` first if the
    /// client has not been seen yet.
    pub fn entry_or_default(&mut self, client: ClientIdentity) -> &mut T
    where
        T: Default,
    {
        let i = match self.index.get(&client) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(client.clone(), i);
                self.entries.push((client, T::default()));
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Inserts or replaces the value for `client`. A replaced client keeps
    /// its original position.
    pub fn insert(&mut self, client: ClientIdentity, value: T) {
        match self.index.get(&client) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(client.clone(), self.entries.len());
                self.entries.push((client, value));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClientIdentity, &T)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn clients(&self) -> impl Iterator<Item = &ClientIdentity> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Builds a new map with the same clients, in the same order.
    pub fn map_values<U>(&self, mut f: impl FnMut(&ClientIdentity, &T) -> U) -> ClientMap<U> {
        ClientMap {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), f(k, v)))
                .collect(),
            index: self.index.clone(),
        }
    }
}

impl<T> FromIterator<(ClientIdentity, T)> for ClientMap<T> {
    fn from_iter<I: IntoIterator<Item = (ClientIdentity, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (client, value) in iter {
            map.insert(client, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for ClientMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (client, value) in &self.entries {
            map.serialize_entry(client.as_key(), value)?;
        }
        map.end()
    }
}

/// Timestamps per client, in file order.
pub type ClientRequestLog = ClientMap<Vec<RequestTimestamp>>;

/// Sessions per client, expressed as interval lists.
pub type ClientSessions = ClientMap<Vec<Session>>;
