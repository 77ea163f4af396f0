use super::Cmdable;
use crate::command::Command;
use crate::reply::{FloatCmd, GeoLocationCmd, GeoPosCmd, GeoSearchLocationCmd, IntCmd, StringSliceCmd};
use crate::types::GeoLocation;

/// Query of `GEORADIUS_RO`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoRadiusQuery {
    /// Search radius
    pub radius: f64,
    /// `m`, `km`, `ft` or `mi`; empty means `km`
    pub unit: String,
    /// Include coordinates (`WITHCOORD`)
    pub with_coord: bool,
    /// Include distance (`WITHDIST`)
    pub with_dist: bool,
    /// Include raw geohash (`WITHHASH`)
    pub with_geo_hash: bool,
    /// Limit the number of results; `0` omits the clause
    pub count: i64,
    /// `ASC` or `DESC`; empty omits the clause
    pub sort: String,
}

/// Query of `GEOSEARCH` with location details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoSearchLocationQuery {
    /// Search around an existing member (`FROMMEMBER`); otherwise around the coordinates
    pub member: Option<String>,
    /// Center longitude (`FROMLONLAT`)
    pub longitude: f64,
    /// Center latitude (`FROMLONLAT`)
    pub latitude: f64,
    /// Search radius (`BYRADIUS`)
    pub radius: f64,
    /// `m`, `km`, `ft` or `mi`; empty means `km`
    pub radius_unit: String,
    /// `ASC` or `DESC`; empty omits the clause
    pub sort: String,
    /// Limit the number of results; `0` omits the clause
    pub count: i64,
    /// Include coordinates (`WITHCOORD`)
    pub with_coord: bool,
    /// Include distance (`WITHDIST`)
    pub with_dist: bool,
    /// Include raw geohash (`WITHHASH`)
    pub with_hash: bool,
}

fn unit_or_km(unit: &str) -> &str {
    if unit.is_empty() { "km" } else { unit }
}

fn with_count_and_sort(cmd: Command, count: i64, sort: &str) -> Command {
    let cmd = if count > 0 { cmd.arg("count").arg(count) } else { cmd };
    if sort.is_empty() { cmd } else { cmd.arg(sort.to_ascii_lowercase()) }
}

/// Geospatial commands.
pub trait GeoCommands: Cmdable {
    /// `GEOADD key longitude latitude member [...]`
    fn geo_add(&self, key: &str, locations: &[GeoLocation]) -> IntCmd {
        let cmd = locations.iter().fold(Command::new("geoadd").arg(key), |cmd, loc| {
            cmd.arg(loc.longitude).arg(loc.latitude).arg(&loc.name)
        });
        self.process(cmd)
    }

    /// `GEOPOS key member [member ...]`
    fn geo_pos(&self, key: &str, members: &[&str]) -> GeoPosCmd {
        self.process(Command::new("geopos").arg(key).args(members.iter().copied()))
    }

    /// `GEODIST key member1 member2 unit`
    fn geo_dist(&self, key: &str, member1: &str, member2: &str, unit: &str) -> FloatCmd {
        self.process(
            Command::new("geodist")
                .arg(key)
                .arg(member1)
                .arg(member2)
                .arg(unit_or_km(unit)),
        )
    }

    /// `GEOHASH key member [member ...]`
    fn geo_hash(&self, key: &str, members: &[&str]) -> StringSliceCmd {
        self.process(Command::new("geohash").arg(key).args(members.iter().copied()))
    }

    /// `GEORADIUS_RO key longitude latitude radius unit [WITH...] [COUNT n] [ASC|DESC]`
    fn geo_radius(
        &self,
        key: &str,
        longitude: f64,
        latitude: f64,
        query: &GeoRadiusQuery,
    ) -> GeoLocationCmd {
        let cmd = Command::new("georadius_ro")
            .arg(key)
            .arg(longitude)
            .arg(latitude)
            .arg(query.radius)
            .arg(unit_or_km(&query.unit))
            .arg_if(query.with_coord, "withcoord")
            .arg_if(query.with_dist, "withdist")
            .arg_if(query.with_geo_hash, "withhash");
        self.process(with_count_and_sort(cmd, query.count, &query.sort))
    }

    /// `GEOSEARCH key FROMMEMBER m | FROMLONLAT lon lat BYRADIUS r unit ... [WITH...]`
    fn geo_search_location(&self, key: &str, query: &GeoSearchLocationQuery) -> GeoSearchLocationCmd {
        let cmd = Command::new("geosearch").arg(key);
        let cmd = match &query.member {
            Some(member) => cmd.arg("frommember").arg(member),
            None => cmd
                .arg("fromlonlat")
                .arg(query.longitude)
                .arg(query.latitude),
        };
        let cmd = cmd
            .arg("byradius")
            .arg(query.radius)
            .arg(unit_or_km(&query.radius_unit));
        let cmd = with_count_and_sort(cmd, query.count, &query.sort)
            .arg_if(query.with_coord, "withcoord")
            .arg_if(query.with_dist, "withdist")
            .arg_if(query.with_hash, "withhash");
        self.process(cmd)
    }
}

impl<C: Cmdable> GeoCommands for C {}
