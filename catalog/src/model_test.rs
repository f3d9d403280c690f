use super::*;

// =============================================================
// Category ids
// =============================================================

#[test]
fn category_id_round_trips_through_from_str() {
    for meta in &CATEGORIES {
        let parsed: Category = meta.id.id().parse().unwrap();
        assert_eq!(parsed, meta.id);
    }
}

#[test]
fn category_from_str_rejects_unknown_ids() {
    let err = "crypto".parse::<Category>().unwrap_err();
    assert_eq!(err, ParseCategoryError("crypto".to_string()));
}

#[test]
fn category_display_matches_id() {
    assert_eq!(Category::DeveloperTools.to_string(), "developer-tools");
    assert_eq!(Category::AiPowered.to_string(), "ai-powered");
    assert_eq!(Category::B2b.to_string(), "b2b");
}

#[test]
fn category_table_covers_every_variant_once() {
    assert_eq!(CATEGORIES.len(), 12);
    for meta in &CATEGORIES {
        let hits = CATEGORIES.iter().filter(|m| m.id == meta.id).count();
        assert_eq!(hits, 1, "{} appears {hits} times", meta.id);
    }
}

#[test]
fn category_meta_resolves_label_and_icon() {
    let meta = Category::Fun.meta();
    assert_eq!(meta.label, "Fun");
    assert_eq!(meta.icon, "🎉");
    assert_eq!(Category::DeveloperTools.meta().label, "Dev Tools");
}

// =============================================================
// Serialized shape
// =============================================================

#[test]
fn builder_serializes_to_camel_case_with_type_tag() {
    let builder = Builder {
        id: "b9".into(),
        name: "Test Agent".into(),
        handle: "@test.ai".into(),
        avatar: "🤖".into(),
        kind: BuilderKind::AiAgent,
        bio: "bio".into(),
        followers: 10,
        apps_created: 2,
        streak: Some(5),
        model: Some("some-model".into()),
    };
    let value = serde_json::to_value(&builder).unwrap();
    assert_eq!(value["type"], "ai-agent");
    assert_eq!(value["appsCreated"], 2);
    assert_eq!(value["streak"], 5);
}

#[test]
fn builder_omits_absent_agent_fields() {
    let builder = Builder {
        id: "b9".into(),
        name: "Human".into(),
        handle: "@h".into(),
        avatar: "🧑".into(),
        kind: BuilderKind::Human,
        bio: String::new(),
        followers: 0,
        apps_created: 0,
        streak: None,
        model: None,
    };
    let value = serde_json::to_value(&builder).unwrap();
    assert_eq!(value["type"], "human");
    assert!(value.get("streak").is_none());
    assert!(value.get("model").is_none());
}

#[test]
fn preview_kind_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(PreviewKind::Interactive).unwrap(),
        "interactive"
    );
    assert_eq!(
        serde_json::to_value(PreviewKind::Screenshot).unwrap(),
        "screenshot"
    );
}

// =============================================================
// Trending score
// =============================================================

#[test]
fn trending_score_weights_saves_and_shares() {
    let mut post = crate::seed::posts()[0].clone();
    post.likes = 100;
    post.saves = 10;
    post.shares = 1;
    assert_eq!(post.trending_score(), 100 + 20 + 3);
}
