//! Paper and reviewer records.

use std::collections::BTreeSet;

/// A submitted paper.
///
/// # Examples
///
/// ```
/// use u_revmatch::instance::Paper;
///
/// let paper = Paper::new("Deep Matching", vec![0.1, 0.9])
///     .with_authors(["Ada Lovelace"])
///     .with_institutions(["UCL"]);
/// assert!(paper.authors.contains("Ada Lovelace"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paper {
    /// Title, used as the unique key.
    pub title: String,
    /// Author identifiers.
    pub authors: BTreeSet<String>,
    /// Institutions of the authors.
    pub institutions: BTreeSet<String>,
    /// Countries of the authors.
    pub countries: BTreeSet<String>,
    /// Content embedding.
    pub embedding: Vec<f64>,
}

impl Paper {
    /// Creates a paper with no authors, institutions or countries.
    pub fn new(title: impl Into<String>, embedding: Vec<f64>) -> Self {
        Self {
            title: title.into(),
            authors: BTreeSet::new(),
            institutions: BTreeSet::new(),
            countries: BTreeSet::new(),
            embedding,
        }
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_institutions<I, S>(mut self, institutions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.institutions = institutions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }
}

/// A candidate reviewer.
///
/// A reviewer carries one embedding per past work; similarity to a paper
/// aggregates over all of them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reviewer {
    /// Full name, used as the unique key.
    pub full_name: String,
    /// Affiliation.
    pub institution: String,
    /// Expertise category labels.
    pub categories: BTreeSet<String>,
    /// Contact address.
    pub email: String,
    /// Expertise embeddings (one or more).
    pub embeddings: Vec<Vec<f64>>,
}

impl Reviewer {
    /// Creates a reviewer with no categories and an empty contact address.
    pub fn new(
        full_name: impl Into<String>,
        institution: impl Into<String>,
        embeddings: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            institution: institution.into(),
            categories: BTreeSet::new(),
            email: String::new(),
            embeddings,
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}
