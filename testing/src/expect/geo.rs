use crate::expected::{
    ExpectedFloat, ExpectedGeoLocation, ExpectedGeoPos, ExpectedGeoSearchLocation, ExpectedInt,
    ExpectedStringSlice,
};
use crate::handle::MockHandle;
use respmock_core::commands::{GeoCommands, GeoRadiusQuery, GeoSearchLocationQuery};
use respmock_core::types::GeoLocation;

impl MockHandle {
    /// Expect `GEOADD`.
    pub fn expect_geo_add(&self, key: &str, locations: &[GeoLocation]) -> ExpectedInt {
        self.expect(|c| c.geo_add(key, locations))
    }

    /// Expect `GEOPOS`.
    pub fn expect_geo_pos(&self, key: &str, members: &[&str]) -> ExpectedGeoPos {
        self.expect(|c| c.geo_pos(key, members))
    }

    /// Expect `GEODIST`.
    pub fn expect_geo_dist(
        &self,
        key: &str,
        member1: &str,
        member2: &str,
        unit: &str,
    ) -> ExpectedFloat {
        self.expect(|c| c.geo_dist(key, member1, member2, unit))
    }

    /// Expect `GEOHASH`.
    pub fn expect_geo_hash(&self, key: &str, members: &[&str]) -> ExpectedStringSlice {
        self.expect(|c| c.geo_hash(key, members))
    }

    /// Expect `GEORADIUS_RO`.
    pub fn expect_geo_radius(
        &self,
        key: &str,
        longitude: f64,
        latitude: f64,
        query: &GeoRadiusQuery,
    ) -> ExpectedGeoLocation {
        self.expect(|c| c.geo_radius(key, longitude, latitude, query))
    }

    /// Expect `GEOSEARCH`.
    pub fn expect_geo_search_location(
        &self,
        key: &str,
        query: &GeoSearchLocationQuery,
    ) -> ExpectedGeoSearchLocation {
        self.expect(|c| c.geo_search_location(key, query))
    }
}
