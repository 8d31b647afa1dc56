use crate::shared::security::sanitize_file_name;
use crate::summary_generation::domain::{Attachment, TicketKey};
use std::collections::HashSet;

/// Local file names for a ticket's attachments, in attachment order.
///
/// The first attachment with a given name is stored as `{KEY}_{name}`;
/// later attachments on the same ticket with the same sanitized name get their
/// attachment id inserted, `{KEY}_{id}_{name}`, and a counter after the id if
/// that name is taken too. The mapping depends only on the ticket key and the
/// attachment list, so a re-fetch targets the same files.
pub fn local_file_names(key: &TicketKey, attachments: &[&Attachment]) -> Vec<String> {
    let mut used = HashSet::new();

    attachments
        .iter()
        .map(|attachment| {
            let safe_name = sanitize_file_name(&attachment.filename);
            let safe_id = sanitize_file_name(&attachment.id);

            let plain = format!("{}_{}", key, safe_name);
            if used.insert(plain.to_lowercase()) {
                return plain;
            }

            let mut candidate = format!("{}_{}_{}", key, safe_id, safe_name);
            let mut counter = 2;
            while !used.insert(candidate.to_lowercase()) {
                candidate = format!("{}_{}_{}_{}", key, safe_id, counter, safe_name);
                counter += 1;
            }
            candidate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(id: &str, filename: &str) -> Attachment {
        Attachment {
            id: id.to_string(),
            filename: filename.to_string(),
            size: 1,
            mime_type: Some("text/csv".to_string()),
            content_url: format!("https://jira.example.com/attachment/{}", id),
        }
    }

    #[test]
    fn test_prefixes_ticket_key_and_replaces_spaces() {
        let key = TicketKey::new("SYS-2826").unwrap();
        let a = attachment("1", "bh glx prbs.csv");
        assert_eq!(local_file_names(&key, &[&a]), vec!["SYS-2826_bh_glx_prbs.csv"]);
    }

    #[test]
    fn test_same_name_on_one_ticket_is_disambiguated() {
        let key = TicketKey::new("SYS-1").unwrap();
        let a = attachment("100", "run.csv");
        let b = attachment("101", "run.csv");
        let c = attachment("102", "RUN.csv");

        let names = local_file_names(&key, &[&a, &b, &c]);
        assert_eq!(
            names,
            vec!["SYS-1_run.csv", "SYS-1_101_run.csv", "SYS-1_102_RUN.csv"]
        );
    }

    #[test]
    fn test_id_fallback_never_reuses_a_taken_name() {
        let key = TicketKey::new("SYS-1").unwrap();
        let a = attachment("3", "2_run.csv");
        let b = attachment("1", "run.csv");
        let c = attachment("2", "run.csv");

        let names = local_file_names(&key, &[&a, &b, &c]);
        assert_eq!(
            names,
            vec!["SYS-1_2_run.csv", "SYS-1_run.csv", "SYS-1_2_2_run.csv"]
        );
    }

    #[test]
    fn test_plain_name_taken_by_earlier_fallback() {
        let key = TicketKey::new("SYS-1").unwrap();
        let a = attachment("1", "run.csv");
        let b = attachment("2", "run.csv");
        let c = attachment("3", "2_run.csv");

        let names = local_file_names(&key, &[&a, &b, &c]);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), 3);
        assert_eq!(names[2], "SYS-1_3_2_run.csv");
    }

    #[test]
    fn test_same_name_on_different_tickets_does_not_collide() {
        let a = attachment("1", "run.csv");
        let first = local_file_names(&TicketKey::new("SYS-1").unwrap(), &[&a]);
        let second = local_file_names(&TicketKey::new("SYS-2").unwrap(), &[&a]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_names_are_stable_across_calls() {
        let key = TicketKey::new("SYS-1").unwrap();
        let a = attachment("100", "run.csv");
        let b = attachment("101", "run.csv");
        assert_eq!(
            local_file_names(&key, &[&a, &b]),
            local_file_names(&key, &[&a, &b])
        );
    }
}
