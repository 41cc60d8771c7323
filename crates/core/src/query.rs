//! Sorting, filtering and pagination over the ship collection.
//!
//! The pure functions ([`select`], [`count_matching`]) operate on an
//! in-memory collection; [`QueryEngine`] loads that collection from the
//! injected storage and delegates to them.

use std::cmp::Ordering;
use std::ops::Range;
use std::sync::Arc;

use crate::error::CoreError;
use crate::filter::{ShipCriteria, ShipFilter};
use crate::ship::Ship;
use crate::storage::ShipStorage;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page returned when `pageNumber` is absent.
pub const DEFAULT_PAGE_NUMBER: i64 = 0;

/// Page size used when `pageSize` is absent.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Field a list query is ordered by. Ties are always broken by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Planet,
    ShipType,
    ProdDate,
    IsUsed,
    Speed,
    CrewSize,
    Rating,
}

/// Accepted spellings. The upper-case entries are the legacy `order`
/// constants (`DATE` maps to the production date).
const SORT_KEYS: &[(&str, SortKey)] = &[
    ("id", SortKey::Id),
    ("name", SortKey::Name),
    ("planet", SortKey::Planet),
    ("shipType", SortKey::ShipType),
    ("prodDate", SortKey::ProdDate),
    ("isUsed", SortKey::IsUsed),
    ("speed", SortKey::Speed),
    ("crewSize", SortKey::CrewSize),
    ("rating", SortKey::Rating),
    ("ID", SortKey::Id),
    ("SPEED", SortKey::Speed),
    ("DATE", SortKey::ProdDate),
    ("RATING", SortKey::Rating),
];

impl SortKey {
    /// Look up a caller-supplied sort key.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        SORT_KEYS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, key)| key)
            .ok_or_else(|| CoreError::Validation(format!("Unknown sort key '{s}'")))
    }

    /// Wire name of the field this key orders by.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Planet => "planet",
            Self::ShipType => "shipType",
            Self::ProdDate => "prodDate",
            Self::IsUsed => "isUsed",
            Self::Speed => "speed",
            Self::CrewSize => "crewSize",
            Self::Rating => "rating",
        }
    }

    /// Compare two ships by this key, then by id.
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        let primary = match self {
            Self::Id => Ordering::Equal,
            Self::Name => a.name.cmp(&b.name),
            Self::Planet => a.planet.cmp(&b.planet),
            Self::ShipType => a.ship_type.as_str().cmp(b.ship_type.as_str()),
            Self::ProdDate => a.prod_date.cmp(&b.prod_date),
            Self::IsUsed => a.is_used.cmp(&b.is_used),
            Self::Speed => a.speed.total_cmp(&b.speed),
            Self::CrewSize => a.crew_size.cmp(&b.crew_size),
            Self::Rating => a.rating.total_cmp(&b.rating),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// Requested page. Absent values fall back to the defaults above.
///
/// A negative page number is treated as page 0; a page size of zero or
/// less yields an empty page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageRequest {
    pub fn new(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Index range of this page within a result of `len` items.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size <= 0 {
            return 0..0;
        }
        let number = self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER).max(0);
        let offset = number.saturating_mul(size);

        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        start..start.saturating_add(size).min(len)
    }
}

// ---------------------------------------------------------------------------
// Pure query functions
// ---------------------------------------------------------------------------

/// Order `ships` by `key` ascending with `id` as tie-break.
pub fn sort_ships(ships: &mut [Ship], key: SortKey) {
    ships.sort_by(|a, b| key.compare(a, b));
}

/// Sort (when a key is given), filter, then cut out the requested page.
pub fn select(
    mut ships: Vec<Ship>,
    filter: &ShipFilter,
    sort: Option<SortKey>,
    page: PageRequest,
) -> Vec<Ship> {
    if let Some(key) = sort {
        sort_ships(&mut ships, key);
    }
    let mut matching: Vec<Ship> = ships.into_iter().filter(|s| filter.matches(s)).collect();
    let range = page.bounds(matching.len());
    matching.drain(range).collect()
}

/// Number of ships satisfying `filter`.
pub fn count_matching(ships: &[Ship], filter: &ShipFilter) -> usize {
    ships.iter().filter(|s| filter.matches(s)).count()
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Runs list and count queries against the injected storage.
#[derive(Clone)]
pub struct QueryEngine {
    storage: Arc<dyn ShipStorage>,
}

impl QueryEngine {
    pub fn new(storage: Arc<dyn ShipStorage>) -> Self {
        Self { storage }
    }

    /// List one page of ships matching `criteria`.
    pub async fn list(
        &self,
        criteria: &ShipCriteria,
        sort: Option<SortKey>,
        page: PageRequest,
    ) -> Result<Vec<Ship>, CoreError> {
        let filter = ShipFilter::compile(criteria)?;
        let ships = self.storage.find_all().await?;
        let total = ships.len();
        let result = select(ships, &filter, sort, page);
        tracing::debug!(
            total,
            returned = result.len(),
            sort = sort.map(|k| k.field_name()),
            "Listed ships",
        );
        Ok(result)
    }

    /// Count ships matching `criteria`.
    pub async fn count(&self, criteria: &ShipCriteria) -> Result<usize, CoreError> {
        let filter = ShipFilter::compile(criteria)?;
        let ships = self.storage.find_all().await?;
        Ok(count_matching(&ships, &filter))
    }
}
