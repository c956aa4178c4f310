/// Base address of the remote cars API. Set `DRIVESPHERE_API_URL` at build
/// time to point the client somewhere else.
pub const API_BASE_URL: &str = match option_env!("DRIVESPHERE_API_URL") {
    Some(url) => url,
    None => "https://mock-cars-api-39814baaf6c0.herokuapp.com",
};

pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x200";
