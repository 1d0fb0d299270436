use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::GameError;
use crate::wire::Map;

/// A punter's color.
pub type PunterId = usize;
/// Dense internal site index, `0..site_count`.
pub type SiteId = usize;
/// Stable river id, assigned in map order.
pub type RiverId = usize;

/// A site in the game graph. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: SiteId,
    /// The id this site had in the map input. May be sparse and arbitrary.
    pub original_id: u64,
    pub is_mine: bool,
    /// Presentation only, no semantic effect.
    pub position: Option<(f64, f64)>,
}

/// A river: an unordered pair of sites, stored lower internal id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct River {
    pub id: RiverId,
    pub source: SiteId,
    pub target: SiteId,
}

impl River {
    fn new(id: RiverId, a: SiteId, b: SiteId) -> Self {
        // Canonical endpoint order is an invariant checked here, never
        // re-derived later.
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        River { id, source, target }
    }

    pub fn touches(&self, site: SiteId) -> bool {
        self.source == site || self.target == site
    }

    pub fn other_end(&self, site: SiteId) -> SiteId {
        if self.source == site {
            self.target
        } else {
            self.source
        }
    }
}

/// A full snapshot of the game graph: sites, mines, rivers, and the partial
/// owner coloring. Claims and owner filters produce new `Graph` values;
/// nothing here is ever mutated after construction.
#[derive(Debug, Clone)]
pub struct Graph {
    sites: Vec<Site>,
    mines: Vec<SiteId>,
    rivers: Vec<River>,
    coloring: FxHashMap<RiverId, PunterId>,
    original_ids: FxHashMap<u64, SiteId>,
    by_ends: FxHashMap<(SiteId, SiteId), RiverId>,
    adjacency: Vec<Vec<(SiteId, RiverId)>>,
}

impl Graph {
    /// Build a graph from the wire map shape, remapping the map's sparse
    /// site ids to dense internal indices.
    pub fn from_map(map: &Map) -> Result<Graph, GameError> {
        let mut sites = Vec::with_capacity(map.sites.len());
        let mut original_ids = FxHashMap::default();

        for (id, spec) in map.sites.iter().enumerate() {
            if original_ids.insert(spec.id, id).is_some() {
                return Err(GameError::Construction(format!(
                    "site {} appears twice",
                    spec.id
                )));
            }
            let position = match (spec.x, spec.y) {
                (Some(x), Some(y)) => Some((x, y)),
                _ => None,
            };
            sites.push(Site {
                id,
                original_id: spec.id,
                is_mine: false,
                position,
            });
        }

        let mut mines = Vec::with_capacity(map.mines.len());
        for mine in &map.mines {
            let id = *original_ids.get(mine).ok_or_else(|| {
                GameError::Construction(format!("mine {} is not a site", mine))
            })?;
            sites[id].is_mine = true;
            mines.push(id);
        }

        let mut rivers = Vec::with_capacity(map.rivers.len());
        let mut seen_ends = FxHashSet::default();
        for (id, spec) in map.rivers.iter().enumerate() {
            let source = *original_ids.get(&spec.source).ok_or_else(|| {
                GameError::Construction(format!("river endpoint {} is not a site", spec.source))
            })?;
            let target = *original_ids.get(&spec.target).ok_or_else(|| {
                GameError::Construction(format!("river endpoint {} is not a site", spec.target))
            })?;
            let river = River::new(id, source, target);
            // Claims address rivers by endpoint pair, so a second river
            // between the same sites would be unreachable.
            if !seen_ends.insert((river.source, river.target)) {
                return Err(GameError::Construction(format!(
                    "river {}-{} appears twice",
                    spec.source, spec.target
                )));
            }
            rivers.push(river);
        }

        Ok(Graph::assemble(
            sites,
            mines,
            rivers,
            FxHashMap::default(),
            original_ids,
        ))
    }

    fn assemble(
        sites: Vec<Site>,
        mines: Vec<SiteId>,
        rivers: Vec<River>,
        coloring: FxHashMap<RiverId, PunterId>,
        original_ids: FxHashMap<u64, SiteId>,
    ) -> Graph {
        let mut by_ends = FxHashMap::default();
        let mut adjacency = vec![Vec::new(); sites.len()];
        for river in &rivers {
            by_ends.insert((river.source, river.target), river.id);
            adjacency[river.source].push((river.target, river.id));
            adjacency[river.target].push((river.source, river.id));
        }

        Graph {
            sites,
            mines,
            rivers,
            coloring,
            original_ids,
            by_ends,
            adjacency,
        }
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Internal ids of the mine sites, in map order.
    pub fn mines(&self) -> &[SiteId] {
        &self.mines
    }

    pub fn rivers(&self) -> &[River] {
        &self.rivers
    }

    pub fn river_count(&self) -> usize {
        self.rivers.len()
    }

    pub fn river(&self, id: RiverId) -> Option<&River> {
        self.rivers.iter().find(|r| r.id == id)
    }

    pub fn owner(&self, river: RiverId) -> Option<PunterId> {
        self.coloring.get(&river).copied()
    }

    /// Sites one river away, regardless of ownership.
    pub fn adjacent(&self, site: SiteId) -> impl Iterator<Item = SiteId> + '_ {
        self.adjacency[site].iter().map(|&(other, _)| other)
    }

    /// Rivers touching the given site, regardless of ownership.
    pub fn adjacent_rivers(&self, site: SiteId) -> impl Iterator<Item = &River> + '_ {
        self.adjacency[site]
            .iter()
            .map(move |&(_, id)| &self.rivers[self.river_index(id)])
    }

    /// Rivers with no owner, in river-id order.
    pub fn unclaimed(&self) -> Vec<&River> {
        self.rivers
            .iter()
            .filter(|r| !self.coloring.contains_key(&r.id))
            .collect()
    }

    /// Returns a new graph whose coloring additionally maps `river` to
    /// `punter`. Claims are permanent; re-claiming is always an error.
    pub fn claim(&self, punter: PunterId, river: RiverId) -> Result<Graph, GameError> {
        if self.river(river).is_none() {
            return Err(GameError::NotFound(format!("river {}", river)));
        }
        if let Some(owner) = self.owner(river) {
            return Err(GameError::AlreadyClaimed { river, owner });
        }

        let mut claimed = self.clone();
        claimed.coloring.insert(river, punter);
        Ok(claimed)
    }

    /// The graph restricted to rivers owned by `punter`. Sites and mines are
    /// unchanged; river ids are preserved.
    pub fn subgraph(&self, punter: PunterId) -> Graph {
        let rivers: Vec<River> = self
            .rivers
            .iter()
            .filter(|r| self.owner(r.id) == Some(punter))
            .copied()
            .collect();
        let coloring = rivers.iter().map(|r| (r.id, punter)).collect();

        Graph::assemble(
            self.sites.clone(),
            self.mines.clone(),
            rivers,
            coloring,
            self.original_ids.clone(),
        )
    }

    /// Resolve an endpoint pair given in original map ids to the river that
    /// connects them.
    pub fn from_original_ends(&self, ends: (u64, u64)) -> Result<&River, GameError> {
        let source = self.site_by_original(ends.0)?;
        let target = self.site_by_original(ends.1)?;
        let key = if source <= target {
            (source, target)
        } else {
            (target, source)
        };

        self.by_ends
            .get(&key)
            .map(|&id| &self.rivers[self.river_index(id)])
            .ok_or_else(|| GameError::NotFound(format!("river {}-{}", ends.0, ends.1)))
    }

    /// The endpoints of `river` as original map ids, source first.
    pub fn original_ends(&self, river: &River) -> (u64, u64) {
        (
            self.sites[river.source].original_id,
            self.sites[river.target].original_id,
        )
    }

    pub fn site_by_original(&self, original: u64) -> Result<SiteId, GameError> {
        self.original_ids
            .get(&original)
            .copied()
            .ok_or_else(|| GameError::NotFound(format!("site {}", original)))
    }

    // Subgraphs keep their original river ids, so id and position in the
    // rivers vec can differ.
    fn river_index(&self, id: RiverId) -> usize {
        self.rivers
            .iter()
            .position(|r| r.id == id)
            .expect("adjacency only references retained rivers")
    }
}
