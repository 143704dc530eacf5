//! Clipboard and CSV exports

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::DomainCandidate;

/// CSV header row
pub const CSV_HEADERS: [&str; 6] = ["Domain", "Keyword", "City", "State", "Population", "Available"];

/// Newline-joined domain list, one per row, for clipboard hand-off
pub fn clipboard_text(candidates: &[DomainCandidate]) -> String {
    candidates
        .iter()
        .map(|c| c.domain.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write all candidates as CSV with standard field quoting
pub fn write_csv<W: Write>(writer: W, candidates: &[DomainCandidate]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for candidate in candidates {
        let population = candidate.population.to_string();
        csv_writer.write_record([
            candidate.domain.as_str(),
            candidate.keyword.as_str(),
            candidate.city.as_str(),
            candidate.state.as_str(),
            population.as_str(),
            if candidate.available { "Yes" } else { "No" },
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the CSV to a file path
pub fn export_csv(path: &Path, candidates: &[DomainCandidate]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| {
        crate::error::GeoDomainError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;
    write_csv(file, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> DomainCandidate {
        DomainCandidate {
            domain: "lawyeraustin.com".to_string(),
            keyword: "lawyer".to_string(),
            city: "Austin".to_string(),
            state: "Texas".to_string(),
            population: 1_028_225,
            available: true,
            trademark: false,
        }
    }

    #[test]
    fn test_csv_single_candidate() {
        let mut out = Vec::new();
        write_csv(&mut out, &[candidate()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Domain,Keyword,City,State,Population,Available\n\
             lawyeraustin.com,lawyer,Austin,Texas,1028225,Yes\n"
        );
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let mut c = candidate();
        c.keyword = "law, firm".to_string();
        c.available = false;

        let mut out = Vec::new();
        write_csv(&mut out, &[c]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"law, firm\""));
        assert!(text.ends_with(",No\n"));
    }

    #[test]
    fn test_clipboard_text_is_newline_joined_domains() {
        let mut second = candidate();
        second.domain = "lawyerdallas.com".to_string();

        let text = clipboard_text(&[candidate(), second]);
        assert_eq!(text, "lawyeraustin.com\nlawyerdallas.com");
        assert_eq!(clipboard_text(&[]), "");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domains.csv");
        export_csv(&path, &[candidate()]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Domain,Keyword,City,State,Population,Available"));
        assert!(text.contains("lawyeraustin.com"));
    }
}
