//! Gravatar avatar URLs

/// Prefix every avatar URL starts with. The digest is appended directly.
pub const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar/";

/// CSS classes applied to the rendered avatar image
pub const AVATAR_CLASS: &str = "ui avatar image";

/// Compute the lowercase MD5 hex digest of a string.
pub fn md5_hex(input: &str) -> String {
    use md5::Digest;
    let hash = md5::Md5::digest(input.as_bytes());
    hex::encode(hash)
}

/// Digest segment for an avatar URL.
///
/// The email is hashed exactly as given. An absent email produces an empty
/// segment rather than an error.
pub fn gravatar_hash(email: Option<&str>) -> String {
    match email {
        Some(email) => md5_hex(email),
        None => String::new(),
    }
}

/// Full avatar URL for an optional email address.
///
/// Only builds the URL; nothing is fetched.
pub fn gravatar_url(email: Option<&str>) -> String {
    let url = format!("{}{}", GRAVATAR_BASE_URL, gravatar_hash(email));
    tracing::trace!("Gravatar URL resolved: {}", url);
    url
}
