use periodical_core::{Article, Author, Catalog, Magazine};

#[test]
fn add_article_registers_and_links_both_sides() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    let magazine = Magazine::new(&catalog, "Vogue", "Fashion");

    let article = author
        .add_article(&catalog, Some(&magazine), "Great Shoes Today")
        .expect("magazine is present");

    assert_eq!(catalog.article_count(), 1);
    assert_eq!(author.articles(&catalog), vec![article.clone()]);
    assert_eq!(magazine.articles(&catalog), vec![article]);
    assert_eq!(
        magazine.article_titles(&catalog),
        Some(vec![Some("Great Shoes Today".to_string())])
    );
}

#[test]
fn add_article_without_magazine_returns_none_and_registers_nothing() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");

    assert!(author.add_article(&catalog, None, "Great Shoes Today").is_none());
    assert_eq!(catalog.article_count(), 0);
}

#[test]
fn add_article_with_invalid_title_still_registers_article() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    let magazine = Magazine::new(&catalog, "Vogue", "Fashion");

    let article = author
        .add_article(&catalog, Some(&magazine), "Hey")
        .expect("magazine is present");

    assert_eq!(article.title(), None);
    assert_eq!(author.articles(&catalog), vec![article]);
}

#[test]
fn articles_are_matched_by_identity_in_creation_order() {
    let catalog = Catalog::new();
    let sam = Author::new("Sam");
    let other_sam = Author::new("Sam");
    let vogue = Magazine::new(&catalog, "Vogue", "Fashion");
    let wired = Magazine::new(&catalog, "Wired", "Tech");

    let first = Article::new(&catalog, Some(&sam), Some(&vogue), "First Piece");
    Article::new(&catalog, Some(&other_sam), Some(&vogue), "Not Mine");
    let second = Article::new(&catalog, Some(&sam), Some(&wired), "Second Piece");

    assert_eq!(sam.articles(&catalog), vec![first, second]);
    assert_eq!(other_sam.articles(&catalog).len(), 1);
}

#[test]
fn magazines_are_distinct_in_first_occurrence_order() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    let vogue = Magazine::new(&catalog, "Vogue", "Fashion");
    let wired = Magazine::new(&catalog, "Wired", "Tech");

    author.add_article(&catalog, Some(&wired), "Chips Everywhere");
    author.add_article(&catalog, Some(&vogue), "Great Shoes Today");
    author.add_article(&catalog, Some(&wired), "Chips Again Today");

    assert_eq!(author.magazines(&catalog), vec![wired, vogue]);
}

#[test]
fn magazines_skip_articles_without_magazine() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    Article::new(&catalog, Some(&author), None, "Nowhere Piece");

    assert!(author.magazines(&catalog).is_empty());
    assert_eq!(author.topic_areas(&catalog), None);
}

#[test]
fn topic_areas_are_distinct_categories() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    let vogue = Magazine::new(&catalog, "Vogue", "Fashion");
    let elle = Magazine::new(&catalog, "Elle", "Fashion");
    let wired = Magazine::new(&catalog, "Wired", "Tech");

    author.add_article(&catalog, Some(&vogue), "Great Shoes Today");
    author.add_article(&catalog, Some(&wired), "Chips Everywhere");
    author.add_article(&catalog, Some(&elle), "Hats Are Back");

    assert_eq!(
        author.topic_areas(&catalog),
        Some(vec!["Fashion".to_string(), "Tech".to_string()])
    );
}

#[test]
fn topic_areas_is_none_without_articles() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    Magazine::new(&catalog, "Vogue", "Fashion");

    assert_eq!(author.topic_areas(&catalog), None);
}

#[test]
fn topic_areas_skip_magazines_without_category() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    let blank = Magazine::new(&catalog, "Blank", "");
    let wired = Magazine::new(&catalog, "Wired", "Tech");

    author.add_article(&catalog, Some(&blank), "Empty Words");
    assert_eq!(author.topic_areas(&catalog), None);

    author.add_article(&catalog, Some(&wired), "Chips Everywhere");
    assert_eq!(author.topic_areas(&catalog), Some(vec!["Tech".to_string()]));
}

#[test]
fn queries_reflect_live_magazine_changes() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    let magazine = Magazine::new(&catalog, "Vogue", "Fashion");
    author.add_article(&catalog, Some(&magazine), "Great Shoes Today");

    magazine.set_category("Style");

    assert_eq!(author.topic_areas(&catalog), Some(vec!["Style".to_string()]));
}

#[test]
fn clear_detaches_existing_entities_from_queries() {
    let catalog = Catalog::new();
    let author = Author::new("Sam");
    let magazine = Magazine::new(&catalog, "Vogue", "Fashion");
    author.add_article(&catalog, Some(&magazine), "Great Shoes Today");

    catalog.clear();

    assert!(author.articles(&catalog).is_empty());
    assert_eq!(catalog.magazine_count(), 0);
    assert_eq!(magazine.name().as_deref(), Some("Vogue"));
}
