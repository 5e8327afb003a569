use kindleparse::{
    clipping::{Book, Clipping, ClippingType, Location},
    grouper::{group_clippings, GroupedClippings},
};

fn clipping(author: &str, title: &str, clipping_type: ClippingType, content: &str) -> Clipping {
    Clipping {
        book: Book::new(author, title),
        clipping_type,
        timestamp: format!("Thursday, 28 January 2021 {}", content.len()),
        content: content.to_owned(),
        location: Some(Location::single(content.len() as u32)),
        page: None,
    }
}

#[test]
fn test_group_preserves_order() {
    let clippings = vec![
        clipping("Anne Frank", "Dziennik", ClippingType::Note, "a"),
        clipping("Marek Aureliusz", "Rozmyślania", ClippingType::Note, "b"),
        clipping("Anne Frank", "Dziennik", ClippingType::Highlight, "c"),
        clipping("", "Deep Work", ClippingType::Highlight, "d"),
        clipping("Anne Frank", "Dziennik", ClippingType::Note, "e"),
    ];

    let grouped = group_clippings(clippings.clone());

    assert_eq!(
        grouped.books().collect::<Vec<_>>(),
        vec![
            &Book::new("Anne Frank", "Dziennik"),
            &Book::new("Marek Aureliusz", "Rozmyślania"),
            &Book::new("", "Deep Work"),
        ]
    );

    let dziennik = grouped
        .get(&Book::new("Anne Frank", "Dziennik"))
        .unwrap()
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>();
    assert_eq!(dziennik, vec!["a", "c", "e"]);

    assert_eq!(
        grouped.get(&Book::new("Marek Aureliusz", "Rozmyślania")),
        Some(&clippings[1..2])
    );
}

#[test]
fn test_group_drops_bookmarks() {
    let clippings = vec![
        clipping("Anne Frank", "Dziennik", ClippingType::Bookmark, ""),
        clipping("Anne Frank", "Dziennik", ClippingType::Note, "a"),
        clipping("Cal Newport", "Deep Work", ClippingType::Bookmark, ""),
    ];

    let grouped = group_clippings(clippings);

    assert_eq!(grouped.len(), 1);
    assert!(grouped.get(&Book::new("Cal Newport", "Deep Work")).is_none());
    assert!(grouped
        .iter()
        .flat_map(|b| &b.clippings)
        .all(|c| c.clipping_type != ClippingType::Bookmark));
}

#[test]
fn test_group_count_matches_distinct_books() {
    let clippings = (0..10)
        .map(|i| {
            clipping(
                "Author",
                &format!("Title {}", i % 4),
                ClippingType::Highlight,
                "x",
            )
        })
        .collect::<Vec<_>>();

    let grouped: GroupedClippings = clippings.into_iter().collect();

    assert_eq!(grouped.len(), 4);
    assert_eq!(
        grouped
            .iter()
            .map(|b| b.clippings.len())
            .collect::<Vec<_>>(),
        vec![3, 3, 2, 2]
    );
}

#[test]
fn test_author_is_part_of_book_identity() {
    let clippings = vec![
        clipping("", "Dziennik", ClippingType::Note, "a"),
        clipping("Anne Frank", "Dziennik", ClippingType::Note, "b"),
    ];

    let grouped = group_clippings(clippings);

    assert_eq!(grouped.len(), 2);
}

#[test]
fn test_unknown_type_is_kept() {
    let clippings = vec![clipping(
        "Anne Frank",
        "Dziennik",
        ClippingType::Unknown("Clip".to_owned()),
        "a",
    )];

    let grouped = group_clippings(clippings);

    assert_eq!(grouped.len(), 1);
}

#[test]
fn test_empty() {
    let grouped = group_clippings(Vec::new());

    assert!(grouped.is_empty());
    assert_eq!(grouped.iter().count(), 0);
}
