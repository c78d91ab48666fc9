use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Sponsor metadata backing the frame modal. Entries are positionally
/// aligned with the `Frame1..Frame5` scene objects.
#[derive(Asset, TypePath, Serialize, Deserialize, Debug, Clone)]
pub struct SponsorCatalog {
    pub sponsors: Vec<SponsorEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SponsorEntry {
    pub title: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
}

/// Publication metadata backing the flipbook viewer. Entries are
/// positionally aligned with the interactive `Publishing1..Publishing2`
/// scene objects. `pages` lists pre-rasterized page bitmaps in reading
/// order; `pdf_url` is the raw document used by the external fallback.
#[derive(Asset, TypePath, Serialize, Deserialize, Debug, Clone)]
pub struct PublicationCatalog {
    pub publications: Vec<PublicationEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PublicationEntry {
    pub title: String,
    pub pages: Vec<String>,
    pub pdf_url: String,
}

impl SponsorCatalog {
    pub fn sponsor(&self, index: usize) -> Option<&SponsorEntry> {
        self.sponsors.get(index)
    }
}

impl PublicationCatalog {
    pub fn publication(&self, index: usize) -> Option<&PublicationEntry> {
        self.publications.get(index)
    }
}
