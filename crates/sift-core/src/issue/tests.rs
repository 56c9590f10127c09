//! Tests for the issue builder and message resolution
//!
//! Copyright (c) 2025 Sift Team
//! Licensed under the Apache-2.0 license

#[cfg(test)]
mod tests {
    use super::super::{
        add_issue, default_message, dot_path, flatten, resolve_message, summarize, Issue,
        IssueKind, IssueOverrides, MessageSource, PathItem, ResolutionScope,
    };
    use crate::testing::{MinLengthAction, TextSchema};
    use crate::{Config, Dataset, ErrorMessage, MessageStore, TypeState};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn first_issue(dataset: &Dataset) -> &Issue {
        &dataset.issues().expect("issue recorded")[0]
    }

    /// Store with a message registered at every store-backed level for `lang`
    fn full_store(lang: Option<&str>) -> MessageStore {
        let mut store = MessageStore::new();
        store.set_specific_message("min_length", "specific", lang);
        store.set_specific_message("string", "specific", lang);
        store.set_schema_message("schema", lang);
        store.set_global_message("global", lang);
        store
    }

    #[test]
    fn test_default_message_with_expected() {
        let mut dataset = Dataset::new(json!("abc"));
        dataset.mark_typed();
        add_issue(&MinLengthAction::new(5), "length", &mut dataset, &Config::new(), None);

        let issue = first_issue(&dataset);
        assert_eq!(issue.message, "Invalid length: Expected >=5 but received \"abc\"");
        assert_eq!(issue.expected.as_deref(), Some(">=5"));
        assert_eq!(issue.received, "\"abc\"");
        assert_eq!(issue.requirement, Some(json!(5)));
        assert_eq!(issue.kind, IssueKind::Validation);
        assert_eq!(issue.issue_type, "min_length");
    }

    #[test]
    fn test_default_message_without_expected() {
        assert_eq!(default_message("input", None, "null"), "Invalid input: Received null");
        assert_eq!(default_message("input", Some(""), "null"), "Invalid input: Received null");
    }

    #[test]
    fn test_schema_issue_marks_untyped() {
        let mut dataset = Dataset::new(json!(1));
        add_issue(&TextSchema::new(), "type", &mut dataset, &Config::new(), None);
        assert_eq!(dataset.state(), TypeState::Untyped);
        assert_eq!(first_issue(&dataset).kind, IssueKind::Schema);
    }

    #[test]
    fn test_validation_issue_keeps_typed() {
        let mut dataset = Dataset::new(json!("ab"));
        dataset.mark_typed();
        add_issue(&MinLengthAction::new(5), "length", &mut dataset, &Config::new(), None);
        assert!(dataset.is_typed());
    }

    #[test]
    fn test_config_flags_and_lang_copied() {
        let config = Config::new().lang("de").abort_pipe_early(true);
        let mut dataset = Dataset::new(json!(1));
        add_issue(&TextSchema::new(), "type", &mut dataset, &config, None);

        let issue = first_issue(&dataset);
        assert_eq!(issue.lang.as_deref(), Some("de"));
        assert_eq!(issue.abort_pipe_early, Some(true));
        assert_eq!(issue.abort_early, None);
    }

    #[test]
    fn test_overrides_for_expected_received_and_path() {
        let input = json!({"a": 1});
        let other = IssueOverrides::new()
            .expected("\"b\"")
            .received("nothing")
            .path(vec![PathItem::object_key(input.clone(), "b", None)]);
        let mut dataset = Dataset::new(input);
        add_issue(&TextSchema::new(), "key", &mut dataset, &Config::new(), Some(&other));

        let issue = first_issue(&dataset);
        assert_eq!(issue.message, "Invalid key: Expected \"b\" but received nothing");
        assert_eq!(dot_path(issue).as_deref(), Some("b"));
    }

    #[test]
    fn test_explicit_absent_input_differs_from_omitted_input() {
        let config = Config::new();

        let mut omitted = Dataset::new(json!("value"));
        add_issue(&TextSchema::new(), "key", &mut omitted, &config, Some(&IssueOverrides::new()));
        assert_eq!(first_issue(&omitted).input, Some(json!("value")));
        assert_eq!(first_issue(&omitted).received, "\"value\"");

        let mut explicit = Dataset::new(json!("value"));
        let other = IssueOverrides::new().input(None);
        add_issue(&TextSchema::new(), "key", &mut explicit, &config, Some(&other));
        assert_eq!(first_issue(&explicit).input, None);
        assert_eq!(first_issue(&explicit).received, "undefined");
    }

    #[test]
    fn test_nested_issues_are_attached() {
        let mut inner = Dataset::new(json!(1));
        add_issue(&TextSchema::new(), "type", &mut inner, &Config::new(), None);
        let nested = inner.into_issues().unwrap();

        let mut dataset = Dataset::new(json!(1));
        let other = IssueOverrides::new().issues(nested.clone());
        add_issue(&TextSchema::new(), "type", &mut dataset, &Config::new(), Some(&other));
        assert_eq!(first_issue(&dataset).sub_issues(), nested.as_slice());
    }

    #[test]
    fn test_precedence_walks_all_six_levels() {
        let lang = Some("de");
        let store = Arc::new(full_store(lang));
        let mut unit = TextSchema::new();
        unit.message = Some(ErrorMessage::text("unit"));
        let config = Config::with_store(Arc::clone(&store)).lang("de").message("config");
        let other = IssueOverrides::new().message("call");

        let render = |unit: &TextSchema, config: &Config, other: Option<&IssueOverrides>| {
            let mut dataset = Dataset::new(json!(1));
            add_issue(unit, "type", &mut dataset, config, other);
            first_issue(&dataset).message.clone()
        };

        assert_eq!(render(&unit, &config, Some(&other)), "call");
        assert_eq!(render(&unit, &config, None), "unit");

        unit.message = None;
        assert_eq!(render(&unit, &config, None), "specific");

        let mut store = full_store(lang);
        store.delete_specific_message("string", lang);
        let config = Config { messages: Arc::new(store.clone()), ..config };
        assert_eq!(render(&unit, &config, None), "schema");

        store.delete_schema_message(lang);
        let config = Config { messages: Arc::new(store.clone()), ..config };
        assert_eq!(render(&unit, &config, None), "config");

        let config = Config { message: None, ..config };
        assert_eq!(render(&unit, &config, None), "global");

        store.delete_global_message(lang);
        let config = Config { messages: Arc::new(store), ..config };
        assert_eq!(
            render(&unit, &config, None),
            "Invalid type: Expected string but received 1"
        );
    }

    #[test]
    fn test_schema_default_skipped_for_validations() {
        let mut store = MessageStore::new();
        store.set_schema_message("schema", None);
        store.set_global_message("global", None);
        let config = Config::with_store(Arc::new(store));

        let mut dataset = Dataset::new(json!("ab"));
        dataset.mark_typed();
        add_issue(&MinLengthAction::new(5), "length", &mut dataset, &config, None);
        assert_eq!(first_issue(&dataset).message, "global");
    }

    #[test]
    fn test_locale_specific_lookup() {
        let mut store = MessageStore::new();
        store.set_specific_message("min_length", "zu kurz", Some("de"));
        store.set_specific_message("min_length", "too short", None);
        let store = Arc::new(store);

        for (lang, expected) in [(Some("de"), "zu kurz"), (None, "too short")] {
            let mut config = Config::with_store(Arc::clone(&store));
            config.lang = lang.map(str::to_string);
            let mut dataset = Dataset::new(json!("ab"));
            dataset.mark_typed();
            add_issue(&MinLengthAction::new(5), "length", &mut dataset, &config, None);
            assert_eq!(first_issue(&dataset).message, expected);
        }
    }

    #[test]
    fn test_function_message_receives_issue() {
        let other = IssueOverrides::new().message(ErrorMessage::func(|issue: &Issue| {
            format!("{} needs {}", issue.received, issue.expected.clone().unwrap_or_default())
        }));
        let mut dataset = Dataset::new(json!("ab"));
        dataset.mark_typed();
        add_issue(&MinLengthAction::new(5), "length", &mut dataset, &Config::new(), Some(&other));
        assert_eq!(first_issue(&dataset).message, "\"ab\" needs >=5");
    }

    #[test]
    fn test_empty_literal_keeps_default_message() {
        let config = Config::new().message("");
        let mut dataset = Dataset::new(json!(3));
        add_issue(&TextSchema::new(), "type", &mut dataset, &config, None);
        assert_eq!(
            first_issue(&dataset).message,
            "Invalid type: Expected string but received 3"
        );
    }

    #[test]
    fn test_resolver_reports_source() {
        let mut store = MessageStore::new();
        store.set_global_message("global", None);
        let config = Config::with_store(Arc::new(store));
        let unit = TextSchema::new();

        let scope = ResolutionScope::new(&unit, &config, None);
        let (source, message) = resolve_message(&scope).unwrap();
        assert_eq!(source, MessageSource::Global);
        assert_eq!(message, &ErrorMessage::text("global"));

        let empty = Config::new();
        let scope = ResolutionScope::new(&unit, &empty, None);
        assert!(resolve_message(&scope).is_none());
    }

    #[test]
    fn test_arguments_are_not_mutated() {
        let store = Arc::new(full_store(None));
        let config = Config::with_store(Arc::clone(&store)).lang("en").abort_early(true);
        let other = IssueOverrides::new()
            .expected("something")
            .input(Some(json!("x")))
            .message("call");
        let unit = MinLengthAction::new(3);

        let config_before = config.clone();
        let other_before = other.clone();
        let expects_before = unit.expects.clone();

        let mut dataset = Dataset::new(json!("ab"));
        add_issue(&unit, "length", &mut dataset, &config, Some(&other));

        assert_eq!(config, config_before);
        assert_eq!(other, other_before);
        assert_eq!(unit.expects, expects_before);
        assert_eq!(unit.requirement, 3);
        assert!(Arc::ptr_eq(&config.messages, &store));
    }

    #[test]
    fn test_issues_keep_detection_order() {
        let mut dataset = Dataset::new(json!(""));
        dataset.mark_typed();
        for requirement in 1..=4 {
            add_issue(&MinLengthAction::new(requirement), "length", &mut dataset, &Config::new(), None);
        }
        let requirements: Vec<_> = dataset
            .issues()
            .unwrap()
            .iter()
            .map(|issue| issue.requirement.clone().unwrap())
            .collect();
        assert_eq!(requirements, vec![json!(1), json!(2), json!(3), json!(4)]);
    }

    #[test]
    fn test_flatten_groups_by_location() {
        let input = json!({"name": 1, "tags": ["x"]});
        let config = Config::new();
        let mut dataset = Dataset::new(input.clone());

        add_issue(&TextSchema::new(), "type", &mut dataset, &config, None);
        let nested = IssueOverrides::new().path(vec![
            PathItem::object_value(input.clone(), "tags", Some(json!(["x"]))),
            PathItem::array_value(json!(["x"]), 0, Some(json!("x"))),
        ]);
        add_issue(&TextSchema::new(), "type", &mut dataset, &config, Some(&nested));
        let other = IssueOverrides::new().path(Vec::new());
        add_issue(&TextSchema::new(), "type", &mut dataset, &config, Some(&other));

        let issues = dataset.issues().unwrap();
        let flat = flatten(issues);
        assert_eq!(flat.root.as_ref().map(Vec::len), Some(1));
        assert_eq!(flat.other.as_ref().map(Vec::len), Some(1));
        let nested = flat.nested.unwrap();
        assert_eq!(nested.keys().collect::<Vec<_>>(), vec!["tags.0"]);
    }

    #[test]
    fn test_summarize() {
        let input = json!({"name": 1});
        let mut dataset = Dataset::new(input.clone());
        add_issue(&TextSchema::new(), "type", &mut dataset, &Config::new(), None);
        let other = IssueOverrides::new()
            .input(Some(json!(1)))
            .path(vec![PathItem::object_value(input, "name", Some(json!(1)))]);
        add_issue(&TextSchema::new(), "type", &mut dataset, &Config::new(), Some(&other));

        assert_eq!(
            summarize(dataset.issues().unwrap()),
            "× Invalid type: Expected string but received Object\n\
             × Invalid type: Expected string but received 1\n  → at name"
        );
    }

    #[test]
    fn test_issue_serializes_with_wire_names() {
        let mut dataset = Dataset::new(json!(2));
        add_issue(&TextSchema::new(), "type", &mut dataset, &Config::new().abort_early(true), None);
        let value = serde_json::to_value(first_issue(&dataset)).unwrap();

        assert_eq!(value["kind"], json!("schema"));
        assert_eq!(value["type"], json!("string"));
        assert_eq!(value["abortEarly"], json!(true));
        assert!(value.get("path").is_none());
    }
}
