//! URL-style requests handed to views outside this program.

use std::fmt;

use reqwest::Url;

pub const DETAIL_PATH: &str = "/evaluation/detail";
pub const FORM_PATH: &str = "/evaluation/form";

/// A navigation request for a collaborator view. Nothing is awaited back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Detail view of a completed evaluation
    EvaluationDetail { id: u32 },
    /// Evaluation form, pre-filled
    EvaluationForm { title: String, facilitator: String },
}

impl Route {
    pub fn detail(id: u32) -> Self {
        Route::EvaluationDetail { id }
    }

    pub fn form(title: impl Into<String>, facilitator: impl Into<String>) -> Self {
        Route::EvaluationForm {
            title: title.into(),
            facilitator: facilitator.into(),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::EvaluationDetail { .. } => DETAIL_PATH,
            Route::EvaluationForm { .. } => FORM_PATH,
        }
    }

    /// Resolve against `base`, keeping any path prefix the base carries.
    /// Query values are form-urlencoded.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        let prefix = base.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{}", self.path()));
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut query = url.query_pairs_mut();
            match self {
                Route::EvaluationDetail { id } => {
                    query.append_pair("id", &id.to_string());
                }
                Route::EvaluationForm { title, facilitator } => {
                    query.append_pair("title", title);
                    query.append_pair("facilitator", facilitator);
                }
            }
        }
        url
    }

    /// Inverse of [`Route::to_url`]. The path must end with a known route.
    pub fn from_url(url: &Url) -> Option<Self> {
        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };
        let path = url.path();
        if path.ends_with(DETAIL_PATH) {
            let id = param("id")?.trim().parse().ok()?;
            Some(Route::EvaluationDetail { id })
        } else if path.ends_with(FORM_PATH) {
            Some(Route::EvaluationForm {
                title: param("title")?,
                facilitator: param("facilitator").unwrap_or_default(),
            })
        } else {
            None
        }
    }

    /// Path and query only, e.g. `/evaluation/detail?id=4`.
    pub fn href(&self) -> String {
        let url = self.to_url(&super::context::default_base_url());
        match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_href() {
        assert_eq!(Route::detail(4).href(), "/evaluation/detail?id=4");
    }

    #[test]
    fn test_form_is_form_urlencoded() {
        let route = Route::form("Weekly sync", "Tanaka Taro");
        assert_eq!(
            route.href(),
            "/evaluation/form?title=Weekly+sync&facilitator=Tanaka+Taro"
        );
    }

    #[test]
    fn test_base_prefix_is_kept() {
        let base = Url::parse("https://meet.example.com/app/").unwrap();
        let url = Route::detail(6).to_url(&base);
        assert_eq!(url.as_str(), "https://meet.example.com/app/evaluation/detail?id=6");
        assert_eq!(Route::from_url(&url), Some(Route::detail(6)));
    }

    #[test]
    fn test_from_url_rejects_unknown_paths() {
        let url = Url::parse("http://localhost:3000/evaluation?id=1").unwrap();
        assert_eq!(Route::from_url(&url), None);
        let url = Url::parse("http://localhost:3000/evaluation/detail?id=abc").unwrap();
        assert_eq!(Route::from_url(&url), None);
    }
}
