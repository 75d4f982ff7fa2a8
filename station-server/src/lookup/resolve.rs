//! Exact station lookup by identifier.

use std::borrow::Cow;

use crate::catalog::Catalog;
use crate::domain::Station;

/// URI prefix of every NMBS/SNCB station id.
pub const STATION_URI_BASE: &str = "http://irail.be/stations/NMBS/";

/// Prefix of old-style iRail ids, e.g. `BE.NMBS.008892007`.
pub const LEGACY_ID_PREFIX: &str = "BE.NMBS.";

/// Turn any accepted id spelling into the canonical station URI.
///
/// - `http://irail.be/stations/NMBS/008892007` is returned as is
/// - `BE.NMBS.008892007` loses its prefix and gets the URI base
/// - `008892007` gets the URI base
///
/// # Examples
///
/// ```
/// use station_server::lookup::canonical_id;
///
/// assert_eq!(
///     canonical_id("BE.NMBS.008892007"),
///     "http://irail.be/stations/NMBS/008892007"
/// );
/// assert_eq!(
///     canonical_id("008892007"),
///     "http://irail.be/stations/NMBS/008892007"
/// );
/// ```
pub fn canonical_id(id: &str) -> Cow<'_, str> {
    if id.starts_with("http") {
        return Cow::Borrowed(id);
    }
    let local = id.strip_prefix(LEGACY_ID_PREFIX).unwrap_or(id);
    Cow::Owned(format!("{STATION_URI_BASE}{local}"))
}

/// Look a station up by id. Matching is exact and case-sensitive.
///
/// Returns `None` when no station has the canonical form of `id`.
pub fn resolve_by_id<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Station> {
    let id = canonical_id(id);
    catalog.stations().iter().find(|station| station.id == *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Station::new("http://irail.be/stations/NMBS/008814001", "Brussel-Zuid", 120.0),
            Station::new("http://irail.be/stations/NMBS/008892007", "Gent-Sint-Pieters", 80.0),
            Station::new("https://example.org/stations/42", "Elsewhere", 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn canonical_forms() {
        assert_eq!(
            canonical_id("http://irail.be/stations/NMBS/008892007"),
            "http://irail.be/stations/NMBS/008892007"
        );
        assert_eq!(
            canonical_id("BE.NMBS.008892007"),
            "http://irail.be/stations/NMBS/008892007"
        );
        assert_eq!(
            canonical_id("008892007"),
            "http://irail.be/stations/NMBS/008892007"
        );
    }

    #[test]
    fn uri_is_borrowed() {
        assert!(matches!(
            canonical_id("https://example.org/stations/42"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn resolves_every_spelling() {
        let catalog = catalog();
        for id in [
            "http://irail.be/stations/NMBS/008892007",
            "BE.NMBS.008892007",
            "008892007",
        ] {
            let station = resolve_by_id(&catalog, id).unwrap();
            assert_eq!(station.name, "Gent-Sint-Pieters", "id {id}");
        }
    }

    #[test]
    fn resolves_foreign_uri_verbatim() {
        let catalog = catalog();
        assert_eq!(
            resolve_by_id(&catalog, "https://example.org/stations/42").map(|s| s.name.as_str()),
            Some("Elsewhere")
        );
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = catalog();
        assert!(resolve_by_id(&catalog, "BE.NMBS.000000000").is_none());
        assert!(resolve_by_id(&catalog, "").is_none());
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = catalog();
        assert!(resolve_by_id(&catalog, "HTTP://IRAIL.BE/STATIONS/NMBS/008892007").is_none());
        assert!(resolve_by_id(&catalog, "be.nmbs.008892007").is_none());
        assert!(resolve_by_id(&catalog, " 008892007").is_none());
        assert!(resolve_by_id(&catalog, "8892007").is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(resolve_by_id(&catalog, "008892007").is_none());
    }
}
