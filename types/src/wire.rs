//! The map, move, and score shapes the core exchanges with the outside
//! world. The surrounding message envelopes (handshake, setup, stop) belong
//! to a protocol adapter, not to this crate.

use serde::{Deserialize, Serialize};

use crate::graph::PunterId;

/// Map input: externally-numbered sites, rivers by endpoint pair, and the
/// mine set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Map {
    pub sites: Vec<SiteSpec>,
    pub rivers: Vec<RiverSpec>,
    pub mines: Vec<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SiteSpec {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiverSpec {
    pub source: u64,
    pub target: u64,
}

/// A move on the wire, discriminated by a single key: `{"claim": {..}}` or
/// `{"pass": {..}}`. The simulator only ever constructs claims, but pass
/// must round-trip for protocol compatibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Claim(Claim),
    Pass(Pass),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claim {
    pub punter: PunterId,
    /// Original map id, not an internal index.
    pub source: u64,
    pub target: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pass {
    pub punter: PunterId,
}

/// One entry of the final scoring output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PunterScore {
    pub punter: PunterId,
    pub score: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_uses_single_key_encoding() {
        let claim = Move::Claim(Claim {
            punter: 2,
            source: 0,
            target: 1,
        });

        let json = serde_json::to_string(&claim).unwrap();
        assert_eq!(json, r#"{"claim":{"punter":2,"source":0,"target":1}}"#);
    }

    #[test]
    fn pass_round_trips() {
        let json = r#"{"pass":{"punter":1}}"#;

        let parsed: Move = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, Move::Pass(Pass { punter: 1 }));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn map_parses_without_coordinates() {
        let json = r#"{"sites":[{"id":4},{"id":0}],"rivers":[{"source":0,"target":4}],"mines":[4]}"#;

        let map: Map = serde_json::from_str(json).unwrap();
        assert_eq!(map.sites.len(), 2);
        assert_eq!(map.sites[0].x, None);
        assert_eq!(map.rivers[0], RiverSpec { source: 0, target: 4 });
        assert_eq!(map.mines, vec![4]);
    }
}
