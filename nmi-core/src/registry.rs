use crate::path::split_scope;
use serde::Serialize;
use urlencoding::encode;

pub const NPMJS_NAME: &str = "npmjs.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryRegistry {
    pub name: String,
    pub url_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryUrl {
    pub name: String,
    pub url: String,
}

pub fn build_registry_url(package_name: &str, pattern: &str) -> String {
    let package = encode(package_name);

    match split_scope(package_name) {
        (Some(scope), name) => pattern
            .replace("{package}", &package)
            .replace("{scope}", &encode(scope))
            .replace("{name}", &encode(name)),
        (None, _) => pattern
            .replace("{package}", &package)
            .replace("{scope}", "")
            .replace("{name}", &package),
    }
}

pub fn registry_urls(package_name: &str, primary: Option<&PrimaryRegistry>) -> Vec<RegistryUrl> {
    let mut urls = Vec::new();
    if package_name.is_empty() {
        return urls;
    }

    if let Some(primary) = primary
        && !primary.name.is_empty()
        && !primary.url_pattern.is_empty()
    {
        urls.push(RegistryUrl {
            name: primary.name.clone(),
            url: build_registry_url(package_name, &primary.url_pattern),
        });
    }

    urls.push(RegistryUrl {
        name: NPMJS_NAME.to_string(),
        url: format!("https://www.npmjs.com/package/{}", encode(package_name)),
    });

    urls
}
