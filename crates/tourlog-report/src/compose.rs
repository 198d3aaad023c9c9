//! Report composition.
//!
//! [`compose`] aggregates a visit's notes and photos into a single markup
//! document. The output is persisted verbatim as a report row and later
//! interpreted line-by-line by [`crate::render`], so every logical unit is
//! emitted on a single line and sections are separated by blank lines.
//!
//! Composition is deterministic for a given input set (modulo the embedded
//! generation timestamp): notes are grouped by category in first-occurrence
//! order, and notes inside a category keep the relative order the caller
//! supplied. Callers pass notes and photos newest first; nothing here
//! re-sorts them.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use tourlog_core::{Note, NoteCategory, Photo, Visit};

/// Fixed sentence emitted under Key Takeaways when a visit has no notes.
const NO_NOTES_TAKEAWAY: &str =
    "No notes were recorded for this visit. Add observations and regenerate this report.";

/// Fixed follow-up checklist emitted under Next Steps.
const NEXT_STEPS: [&str; 5] = [
    "Compare this visit against the other schools on your list",
    "Follow up with the admissions office on any open questions",
    "Review application deadlines and requirements",
    "Discuss impressions with family and counselors",
    "Schedule a second visit or virtual session if needed",
];

/// Compose a report document for a visit.
///
/// Never fails: empty note and photo sequences produce a minimal but valid
/// document. The generation timestamp is taken at the moment of the call;
/// use [`compose_at`] when the stamp must be controlled.
pub fn compose(visit: &Visit, notes: &[Note], photos: &[Photo]) -> String {
    compose_at(visit, notes, photos, Utc::now())
}

/// Compose a report document with an explicit generation timestamp.
///
/// This is the referentially transparent form of [`compose`]: identical
/// inputs always produce identical output.
pub fn compose_at(
    visit: &Visit,
    notes: &[Note],
    photos: &[Photo],
    generated_at: DateTime<Utc>,
) -> String {
    let groups = group_by_category(notes);
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("# {} Visit Report", visit.name));
    sections.push(metadata_block(visit));
    sections.push("---".to_string());

    sections.push(format!(
        "## Executive Summary\nThis visit was documented with {} and {} across {}.",
        count_noun(photos.len(), "photo", "photos"),
        count_noun(notes.len(), "note", "notes"),
        count_noun(groups.len(), "category", "categories"),
    ));

    if !groups.is_empty() {
        let mut section = String::from("## Detailed Observations");
        for (tag, members) in &groups {
            section.push_str(&format!("\n\n### {}", category_label(tag)));
            for note in members {
                section.push_str(&format!("\n\n{}", note.content));
            }
        }
        sections.push(section);
    }

    if !photos.is_empty() {
        let mut section = format!(
            "## Visual Documentation\nThis visit includes {}.",
            count_noun(photos.len(), "photo", "photos"),
        );
        for photo in photos {
            if let Some(caption) = photo.caption.as_deref().map(str::trim) {
                if !caption.is_empty() {
                    section.push_str(&format!("\n- {}", caption));
                }
            }
        }
        sections.push(section);
    }

    let mut takeaways = String::from("## Key Takeaways");
    if groups.is_empty() {
        takeaways.push_str(&format!("\n{}", NO_NOTES_TAKEAWAY));
    } else {
        for (tag, _) in &groups {
            takeaways.push_str(&format!("\n- {}", category_takeaway(tag)));
        }
    }
    sections.push(takeaways);

    let mut next_steps = String::from("## Next Steps");
    for step in NEXT_STEPS {
        next_steps.push_str(&format!("\n- {}", step));
    }
    sections.push(next_steps);

    sections.push(format!(
        "---\nReport generated on {}",
        generated_at.format("%B %-d, %Y at %H:%M UTC"),
    ));

    sections.join("\n\n")
}

/// Partition notes into per-category groups.
///
/// Categories appear in first-occurrence order over the input sequence and
/// notes inside a group keep their input relative order. The scan is a plain
/// vector lookup so the ordering is structural, not an iteration-order
/// accident of an associative container.
fn group_by_category(notes: &[Note]) -> Vec<(&str, Vec<&Note>)> {
    let mut groups: Vec<(&str, Vec<&Note>)> = Vec::new();
    for note in notes {
        let tag = note.category.as_str();
        match groups.iter_mut().find(|(existing, _)| *existing == tag) {
            Some((_, members)) => members.push(note),
            None => groups.push((tag, vec![note])),
        }
    }
    groups
}

fn metadata_block(visit: &Visit) -> String {
    let mut block = format!(
        "**Date:** {}",
        visit.visit_date.format("%B %-d, %Y"),
    );
    if !visit.location.trim().is_empty() {
        block.push_str(&format!("\n**Location:** {}", visit.location));
    }
    block
}

/// `1 photo` / `3 photos` style count phrases.
fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Section heading for a stored category tag, falling back to the raw tag
/// when the tag is outside the closed taxonomy.
fn category_label(tag: &str) -> &str {
    match NoteCategory::from_str(tag) {
        Ok(category) => category.label(),
        Err(_) => tag,
    }
}

/// Takeaway sentence for a stored category tag, with a generic fallback for
/// tags outside the closed taxonomy.
fn category_takeaway(tag: &str) -> String {
    match NoteCategory::from_str(tag) {
        Ok(category) => category.takeaway().to_string(),
        Err(_) => format!("Observations were recorded under the {} heading", tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use tourlog_core::VisitStatus;
    use uuid::Uuid;

    fn visit(name: &str, location: &str) -> Visit {
        Visit {
            id: Uuid::new_v4(),
            owner: "tester".to_string(),
            name: name.to_string(),
            visit_date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            location: location.to_string(),
            coordinates: None,
            status: VisitStatus::Completed,
            created_at_utc: Utc::now(),
            updated_at_utc: Utc::now(),
        }
    }

    fn note(category: &str, content: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            visit_id: Uuid::new_v4(),
            category: category.to_string(),
            content: content.to_string(),
            created_at_utc: Utc::now(),
            updated_at_utc: Utc::now(),
        }
    }

    fn photo(caption: Option<&str>) -> Photo {
        Photo {
            id: Uuid::new_v4(),
            visit_id: Uuid::new_v4(),
            url: "https://blobs.example/p.jpg".to_string(),
            caption: caption.map(str::to_string),
            created_at_utc: Utc::now(),
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 16, 45, 0).unwrap()
    }

    #[test]
    fn test_title_names_the_visit_subject() {
        let doc = compose(&visit("Oberlin College", ""), &[], &[]);
        assert!(doc.starts_with("# Oberlin College Visit Report\n"));
    }

    #[test]
    fn test_empty_inputs_produce_minimal_document() {
        let doc = compose(&visit("Oberlin College", ""), &[], &[]);
        assert!(!doc.is_empty());
        assert!(!doc.contains("## Detailed Observations"));
        assert!(!doc.contains("## Visual Documentation"));
        assert!(doc.contains(NO_NOTES_TAKEAWAY));
        assert!(doc.contains("## Next Steps"));
    }

    #[test]
    fn test_location_line_omitted_when_empty() {
        let without = compose(&visit("Oberlin College", ""), &[], &[]);
        assert!(!without.contains("**Location:**"));

        let with = compose(&visit("Oberlin College", "Oberlin, OH"), &[], &[]);
        assert!(with.contains("**Location:** Oberlin, OH"));
    }

    #[test]
    fn test_date_uses_long_form() {
        let doc = compose(&visit("Oberlin College", ""), &[], &[]);
        assert!(doc.contains("**Date:** March 9, 2026"));
    }

    #[test]
    fn test_grouping_preserves_first_seen_category_order() {
        let notes = vec![
            note("housing", "A"),
            note("academics", "B"),
            note("housing", "C"),
        ];
        let groups = group_by_category(&notes);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "housing");
        assert_eq!(groups[1].0, "academics");
        let housing: Vec<&str> = groups[0].1.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(housing, ["A", "C"]);
    }

    #[test]
    fn test_observations_follow_grouping_order() {
        let notes = vec![
            note("housing", "Dorms felt cramped"),
            note("academics", "Seminar sizes are small"),
            note("housing", "New residence hall opens next fall"),
        ];
        let doc = compose_at(&visit("Oberlin College", ""), &notes, &[], stamp());
        let housing_pos = doc.find("### Housing").unwrap();
        let academics_pos = doc.find("### Academics").unwrap();
        assert!(housing_pos < academics_pos);

        let first = doc.find("Dorms felt cramped").unwrap();
        let second = doc.find("New residence hall opens next fall").unwrap();
        assert!(first < second);
        assert!(second < academics_pos);
    }

    #[test]
    fn test_singular_counts_at_exactly_one() {
        let doc = compose(
            &visit("Oberlin College", ""),
            &[note("general", "x")],
            &[photo(Some("Quad"))],
        );
        assert!(doc.contains("1 photo and 1 note across 1 category."));
        assert!(doc.contains("This visit includes 1 photo."));
    }

    #[test]
    fn test_plural_counts_at_zero_and_two() {
        let doc = compose(&visit("Oberlin College", ""), &[], &[]);
        assert!(doc.contains("0 photos and 0 notes across 0 categories."));

        let notes = vec![note("campus", "a"), note("social", "b")];
        let photos = vec![photo(Some("One")), photo(Some("Two"))];
        let doc = compose(&visit("Oberlin College", ""), &notes, &photos);
        assert!(doc.contains("2 photos and 2 notes across 2 categories."));
    }

    #[test]
    fn test_captionless_photos_contribute_no_bullet() {
        let photos = vec![photo(Some("Main gate")), photo(None), photo(Some("  "))];
        let doc = compose(&visit("Oberlin College", ""), &[], &photos);
        assert!(doc.contains("This visit includes 3 photos."));
        assert!(doc.contains("- Main gate"));
        let bullet_count = doc
            .lines()
            .skip_while(|l| *l != "## Visual Documentation")
            .take_while(|l| !l.starts_with("## Key"))
            .filter(|l| l.starts_with("- "))
            .count();
        assert_eq!(bullet_count, 1);
    }

    #[test]
    fn test_takeaways_follow_category_order() {
        let notes = vec![note("financial", "a"), note("campus", "b")];
        let doc = compose(&visit("Oberlin College", ""), &notes, &[]);
        let financial = doc.find(NoteCategory::Financial.takeaway()).unwrap();
        let campus = doc.find(NoteCategory::Campus.takeaway()).unwrap();
        assert!(financial < campus);
    }

    #[test]
    fn test_unmapped_category_falls_back_to_raw_tag() {
        let notes = vec![note("athletics", "Great stadium")];
        let doc = compose(&visit("Oberlin College", ""), &notes, &[]);
        assert!(doc.contains("### athletics"));
        assert!(doc.contains("- Observations were recorded under the athletics heading"));
    }

    #[test]
    fn test_compose_at_is_referentially_transparent() {
        let notes = vec![note("campus", "Green quad")];
        let photos = vec![photo(Some("Library"))];
        let v = visit("Oberlin College", "Oberlin, OH");
        let a = compose_at(&v, &notes, &photos, stamp());
        let b = compose_at(&v, &notes, &photos, stamp());
        assert_eq!(a, b);
    }

    #[test]
    fn test_footer_carries_generation_timestamp() {
        let doc = compose_at(&visit("Oberlin College", ""), &[], &[], stamp());
        assert!(doc.ends_with("Report generated on March 10, 2026 at 16:45 UTC"));
    }

    #[test]
    fn test_next_steps_has_five_items() {
        let doc = compose(&visit("Oberlin College", ""), &[], &[]);
        let count = doc
            .lines()
            .skip_while(|l| *l != "## Next Steps")
            .filter(|l| l.starts_with("- "))
            .count();
        assert_eq!(count, 5);
    }
}
