use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const REFERENCE_LEN: usize = 8;

/// Generate a display-only reservation reference.
///
/// Eight uppercase alphanumeric characters. The token is never stored or
/// indexed, so it carries no uniqueness guarantee; it exists to give the
/// customer and the admin a shared label inside the emails.
pub fn reservation_reference() -> String {
    let mut rng = rand::thread_rng();
    (0..REFERENCE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
