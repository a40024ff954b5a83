#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use serde_json::json;
    use crate::{CreatePollRequest, Poll, PollError, PollOption, Polls};

    fn request(question: &str, options: &[&str]) -> CreatePollRequest {
        CreatePollRequest {
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[test]
    fn test_options_keyed_by_position() {
        let poll = Poll::new(request("Favorite color?", &["Red", "Green", "Blue"]));

        assert_eq!(poll.question, "Favorite color?");
        assert_eq!(
            serde_json::to_value(&poll.options).unwrap(),
            json!({
                "0": { "label": "Red", "votes": 0 },
                "1": { "label": "Green", "votes": 0 },
                "2": { "label": "Blue", "votes": 0 },
            })
        );
        let keys: Vec<_> = poll.options.keys().cloned().collect();
        assert_eq!(keys, ["0", "1", "2"]);
    }

    #[test]
    fn test_permissive_options() {
        let empty = Poll::new(request("Anything?", &[]));
        assert!(empty.options.is_empty());

        let dup = Poll::new(request("Twice?", &["Yes", "Yes"]));
        assert_eq!(dup.options.len(), 2);
        assert_eq!(dup.options["1"], PollOption::new("Yes"));
    }

    #[test]
    fn test_fresh_ids() {
        let a = Poll::new(request("A?", &["x"]));
        let b = Poll::new(request("A?", &["x"]));
        assert_ne!(a.id, b.id);
        assert_eq!(Uuid::parse_str(&a.id).unwrap().get_version_num(), 4);
        assert_eq!(a.id, a.id.to_lowercase());
    }

    #[test]
    fn test_cast_vote() {
        let mut poll = Poll::new(request("Favorite color?", &["Red", "Blue"]));

        for n in 1..=3 {
            assert_eq!(poll.cast_vote("1"), Ok(n));
        }
        assert_eq!(poll.options["0"].votes, 0);
        assert_eq!(poll.options["1"].votes, 3);
        assert_eq!(poll.total_votes(), 3);

        let before = poll.clone();
        assert_eq!(poll.cast_vote("2"), Err(PollError::OptionNotFound));
        assert_eq!(poll, before);
    }

    #[test]
    fn test_latest_follows_insertion() {
        let mut polls = Polls::new();
        assert!(polls.latest().is_none());

        let first = Poll::new(request("First?", &["a", "b"]));
        let second = Poll::new(request("Second?", &["c"]));
        polls.insert(first.clone());
        polls.insert(second.clone());
        assert_eq!(polls.latest(), Some(&second));

        polls.latest_mut().unwrap().cast_vote("0").unwrap();
        assert_eq!(polls.latest().unwrap().id, second.id);
        assert_eq!(polls.len(), 2);
        assert_ne!(polls.latest(), Some(&first));
    }

    #[test]
    fn test_order_survives_serialization() {
        // Ids chosen so that sorting would reverse them.
        let late = "ffffffff-0000-4000-8000-000000000000";
        let early = "00000000-0000-4000-8000-000000000000";
        let polls: Polls = [
            Poll::with_id(late, "Z?", ["z"]),
            Poll::with_id(early, "A?", ["a"]),
        ]
        .into_iter()
        .collect();

        let text = serde_json::to_string(&polls).unwrap();
        assert!(text.find(late) < text.find(early));

        let back: Polls = serde_json::from_str(&text).unwrap();
        assert_eq!(back, polls);
        assert_eq!(back.latest().unwrap().id, early);
    }

    #[test]
    fn test_votes_default_to_zero() {
        let poll: Poll = serde_json::from_value(json!({
            "id": "6f1c2a8e-5b4d-4c3a-9e2f-1a2b3c4d5e6f",
            "question": "Tea or coffee?",
            "options": { "0": { "label": "Tea" }, "1": { "label": "Coffee", "votes": 4 } }
        }))
        .unwrap();

        assert_eq!(poll.options["0"].votes, 0);
        assert_eq!(poll.options["1"].votes, 4);
    }

    #[test]
    fn test_missing_label_rejected() {
        let result = serde_json::from_value::<Poll>(json!({
            "id": "6f1c2a8e-5b4d-4c3a-9e2f-1a2b3c4d5e6f",
            "question": "Tea or coffee?",
            "options": { "0": { "votes": 1 } }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PollError::NoPolls.to_string(), "No polls found");
        assert_eq!(PollError::OptionNotFound.to_string(), "Option not found");
    }
}
