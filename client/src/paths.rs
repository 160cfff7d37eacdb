//! Client route paths.

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const SIGHTINGS: &str = "/AirlineSightings";

/// Path of the detail route for sighting `id`.
pub fn sighting_detail(id: i64) -> String {
    format!("{SIGHTINGS}/{id}")
}
