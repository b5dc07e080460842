use super::*;

fn project(id: &str, featured: bool) -> Project {
    Project {
        id: id.to_owned(),
        title: format!("Project {id}"),
        description: String::new(),
        category: "Web".to_owned(),
        tech_stack: vec![],
        thumbnail: String::new(),
        live_url: None,
        github_url: None,
        featured,
        created_at: "2024-01-15T00:00:00.000Z".to_owned(),
    }
}

// =============================================================
// Featured strip selection
// =============================================================

#[test]
fn pick_featured_keeps_only_featured_projects() {
    let picked = pick_featured(vec![
        project("a", true),
        project("b", false),
        project("c", true),
    ]);
    let ids: Vec<_> = picked.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn pick_featured_caps_the_strip_at_three() {
    let picked = pick_featured(vec![
        project("a", true),
        project("b", true),
        project("c", true),
        project("d", true),
    ]);
    assert_eq!(picked.len(), 3);
}

#[test]
fn pick_featured_handles_an_empty_list() {
    assert!(pick_featured(vec![]).is_empty());
}
