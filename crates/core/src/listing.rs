//! Repository listing run.
//!
//! Prints the files of each source that end with a given suffix. The match is
//! case-sensitive: with suffix `.gguf`, `model.GGUF` is not listed.

use std::io::{self, Write};

use tracing::warn;

use crate::hub::{HubError, ListingService};

/// Result of listing one source.
#[derive(Debug)]
pub struct SourceListing {
    pub source: String,
    /// Matching filenames in hub order, or the listing error.
    pub result: Result<Vec<String>, HubError>,
}

/// Filenames ending with `suffix`, preserving order.
pub fn filter_by_suffix<'a>(files: &'a [String], suffix: &str) -> Vec<&'a str> {
    files
        .iter()
        .map(String::as_str)
        .filter(|f| f.ends_with(suffix))
        .collect()
}

/// Lists every source in order, printing matches or the error per source.
pub async fn list_sources<W: Write>(
    service: &dyn ListingService,
    sources: &[String],
    suffix: &str,
    out: &mut W,
) -> io::Result<Vec<SourceListing>> {
    let mut listings = Vec::with_capacity(sources.len());

    for source in sources {
        writeln!(out)?;
        writeln!(out, "📁 Files in {}:", source)?;

        let result = match service.list_files(source).await {
            Ok(files) => {
                let matches: Vec<String> = filter_by_suffix(&files, suffix)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                for file in &matches {
                    writeln!(out, "  ✓ {}", file)?;
                }
                Ok(matches)
            }
            Err(e) => {
                warn!(source = %source, error = %e, "Listing failed");
                writeln!(out, "  ❌ Error: {}", e)?;
                Err(e)
            }
        };

        listings.push(SourceListing {
            source: source.clone(),
            result,
        });
    }

    Ok(listings)
}
