use std::collections::HashMap;

use serde::Serialize;

use crate::clipping::{Book, Clipping, ClippingType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookClippings {
    pub book: Book,
    pub clippings: Vec<Clipping>,
}

// 本ごとにまとめた Clipping
// 本の順番も Clipping の順番も最初に現れた順を保つ
#[derive(Debug, Default)]
pub struct GroupedClippings {
    books: Vec<BookClippings>,
    index: HashMap<Book, usize>,
}

impl GroupedClippings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, clipping: Clipping) {
        // ブックマークには本文が無い
        if clipping.clipping_type == ClippingType::Bookmark {
            return;
        }

        match self.index.get(&clipping.book) {
            Some(&i) => self.books[i].clippings.push(clipping),
            None => {
                self.index.insert(clipping.book.clone(), self.books.len());
                self.books.push(BookClippings {
                    book: clipping.book.clone(),
                    clippings: vec![clipping],
                });
            }
        }
    }

    pub fn get(&self, book: &Book) -> Option<&[Clipping]> {
        self.index
            .get(book)
            .map(|&i| self.books[i].clippings.as_slice())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().map(|b| &b.book)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookClippings> {
        self.books.iter()
    }

    pub fn as_slice(&self) -> &[BookClippings] {
        &self.books
    }
}

impl FromIterator<Clipping> for GroupedClippings {
    fn from_iter<I: IntoIterator<Item = Clipping>>(iter: I) -> Self {
        let mut grouped = GroupedClippings::new();
        for clipping in iter {
            grouped.push(clipping);
        }
        grouped
    }
}

impl<'a> IntoIterator for &'a GroupedClippings {
    type Item = &'a BookClippings;
    type IntoIter = std::slice::Iter<'a, BookClippings>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

pub fn group_clippings<I>(clippings: I) -> GroupedClippings
where
    I: IntoIterator<Item = Clipping>,
{
    clippings.into_iter().collect()
}
