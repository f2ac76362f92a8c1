/// Generates an API transaction identifier.
///
/// The identifier is 30 characters long and made of uppercase letters
/// (`A-Z`) and digits (`0-9`), generated with `nanoid`. It is sent as
/// `X-Id-Api-Transaction` to correlate the requests of one logical operation.
///
/// # Examples
/// ```
/// use tracking3_client::utils::id::get_id;
/// let id = get_id().unwrap();
/// assert_eq!(id.len(), 30);
/// ```
pub fn get_id() -> Option<String> {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    Some(nanoid::nanoid!(30, &alphabet))
}
