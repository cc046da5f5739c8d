use serde::{Deserialize, Deserializer, Serialize};

/// A bookmark field that keyword search can look into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Url,
    Folder,
}

/// Keyword filter used by search and extraction.
///
/// An empty include list matches nothing. `include_words` accepts either a
/// single string or a list of strings when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(default, deserialize_with = "one_or_many")]
    pub include_words: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub exclude_words: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default = "default_search_in")]
    pub search_in: Vec<SearchField>,
    #[serde(default)]
    pub include_all_words: bool,
}

fn default_search_in() -> Vec<SearchField> {
    vec![SearchField::Title, SearchField::Url]
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(word) => vec![word],
        OneOrMany::Many(words) => words,
    })
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_words: Vec::new(),
            exclude_words: Vec::new(),
            case_sensitive: false,
            search_in: default_search_in(),
            include_all_words: false,
        }
    }
}

impl SearchOptions {
    /// Options that include any of `words`, with every other setting at its default.
    pub fn including<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include_words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn excluding<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn search_in(mut self, fields: &[SearchField]) -> Self {
        self.search_in = fields.to_vec();
        self
    }

    pub fn include_all_words(mut self, yes: bool) -> Self {
        self.include_all_words = yes;
        self
    }
}
