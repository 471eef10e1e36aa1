use contactdesk_core::{contact_tags, extract_tags, filter_contacts, Contact, FilterMode};

fn contacts(names: &[&str]) -> Vec<Contact> {
    names.iter().map(|name| Contact::new(*name)).collect()
}

#[test]
fn numeric_tokens_are_excluded_from_the_tag_set() {
    let dataset = contacts(&["Desk +Foo123 +456", "Other +456"]);
    assert_eq!(extract_tags(&dataset), vec!["+foo123"]);
}

#[test]
fn extraction_is_independent_of_record_order() {
    let names = ["A +x +Y", "B +y", "C", "D +z +447700900123", "E +X"];
    let forward = contacts(&names);
    let mut reversed_names = names;
    reversed_names.reverse();
    let reversed = contacts(&reversed_names);
    let rotated = contacts(&[names[2], names[4], names[0], names[3], names[1]]);

    let expected = extract_tags(&forward);
    assert_eq!(expected, vec!["+x", "+y", "+z"]);
    assert_eq!(extract_tags(&reversed), expected);
    assert_eq!(extract_tags(&rotated), expected);
    assert_eq!(extract_tags(&forward), expected);
}

#[test]
fn empty_selection_returns_every_contact_in_order() {
    let dataset = contacts(&["A +a", "B", "C +c"]);
    for mode in [FilterMode::All, FilterMode::Any] {
        let kept: Vec<&str> = filter_contacts(&dataset, &[], mode)
            .into_iter()
            .map(|contact| contact.display_name.as_str())
            .collect();
        assert_eq!(kept, vec!["A +a", "B", "C +c"]);
    }
}

#[test]
fn all_mode_returns_exactly_the_supersets() {
    let dataset = contacts(&[
        "One +a +b",
        "Two +A",
        "Three +b +c +a",
        "Four +ab",
        "Five +B +a",
    ]);
    let selected = vec!["+a".to_string(), "+b".to_string()];

    let kept = filter_contacts(&dataset, &selected, FilterMode::All);
    let expected: Vec<&Contact> = dataset
        .iter()
        .filter(|contact| {
            let tags = contact_tags(&contact.display_name);
            selected.iter().all(|tag| tags.contains(tag))
        })
        .collect();

    assert_eq!(kept, expected);
    assert_eq!(
        kept.iter()
            .map(|contact| contact.display_name.as_str())
            .collect::<Vec<_>>(),
        vec!["One +a +b", "Three +b +c +a", "Five +B +a"]
    );
}

#[test]
fn any_mode_needs_one_match() {
    let dataset = contacts(&["One +a", "Two +c", "Three", "Four +b +c"]);
    let selected = vec!["+a".to_string(), "+b".to_string()];
    let kept: Vec<&str> = filter_contacts(&dataset, &selected, FilterMode::Any)
        .into_iter()
        .map(|contact| contact.display_name.as_str())
        .collect();
    assert_eq!(kept, vec!["One +a", "Four +b +c"]);
}
