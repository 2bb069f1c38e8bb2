//! Unit tests for the library arena

#[cfg(test)]
mod tests {
    use crate::model::{AlbumId, PhotoId, Tag};
    use crate::store::{Library, LibraryError};

    fn tag(t: &str, v: &str) -> Tag {
        Tag::new(t, v).unwrap()
    }

    fn library_with_album(name: &str) -> (Library, AlbumId) {
        let mut library = Library::new();
        let album = library.create_album(name).unwrap();
        (library, album)
    }

    #[test]
    fn test_create_album_trims_and_finds() {
        let (library, album) = library_with_album("  Vacation ");
        assert_eq!(library.album(album).unwrap().name(), "Vacation");
        assert_eq!(library.find_album("Vacation"), Some(album));
        assert_eq!(library.find_album("vacation"), None);
    }

    #[test]
    fn test_create_album_rejects_duplicates_and_empty() {
        let (mut library, _) = library_with_album("Vacation");
        assert_eq!(
            library.create_album("Vacation"),
            Err(LibraryError::DuplicateAlbum("Vacation".into()))
        );
        assert_eq!(library.create_album("   "), Err(LibraryError::EmptyName));
        assert_eq!(library.album_count(), 1);
    }

    #[test]
    fn test_rename_album() {
        let (mut library, a) = library_with_album("A");
        let b = library.create_album("B").unwrap();

        assert_eq!(
            library.rename_album(b, "A"),
            Err(LibraryError::DuplicateAlbum("A".into()))
        );
        assert!(library.rename_album(a, "A").is_ok());
        library.rename_album(a, "C").unwrap();
        assert_eq!(library.find_album("C"), Some(a));
        assert_eq!(library.find_album("A"), None);
        assert_eq!(
            library.rename_album(AlbumId::new(99), "D"),
            Err(LibraryError::AlbumNotFound(AlbumId::new(99)))
        );
    }

    #[test]
    fn test_albums_iterate_in_creation_order() {
        let mut library = Library::new();
        for name in ["Zoo", "Alps", "Market"] {
            library.create_album(name).unwrap();
        }
        let names: Vec<&str> = library.albums().map(|(_, a)| a.name()).collect();
        assert_eq!(names, vec!["Zoo", "Alps", "Market"]);
    }

    #[test]
    fn test_add_photo_is_idempotent() {
        let (mut library, album) = library_with_album("A");
        let first = library.add_photo(album, "Sunset", "/sdcard/1.jpg").unwrap();
        let second = library.add_photo(album, "Sunset again", "/sdcard/1.jpg").unwrap();

        assert_eq!(first, second);
        assert_eq!(library.album(album).unwrap().photo_count(), 1);
        assert_eq!(library.photo(first).unwrap().caption(), "Sunset");
    }

    #[test]
    fn test_add_photo_default_caption() {
        let (mut library, album) = library_with_album("A");
        library.add_photo(album, "", "/sdcard/1.jpg").unwrap();
        let id = library.add_photo(album, "  ", "/sdcard/2.jpg").unwrap();
        assert_eq!(library.photo(id).unwrap().caption(), "Photo 2");
    }

    #[test]
    fn test_add_photo_validation() {
        let (mut library, album) = library_with_album("A");
        assert_eq!(library.add_photo(album, "x", " "), Err(LibraryError::EmptyLocator));
        assert_eq!(
            library.add_photo(AlbumId::new(5), "x", "/a.jpg"),
            Err(LibraryError::AlbumNotFound(AlbumId::new(5)))
        );
        assert_eq!(library.photo_count(), 0);
    }

    #[test]
    fn test_shared_photo_sees_tags_from_every_album() {
        let (mut library, a) = library_with_album("A");
        let b = library.create_album("B").unwrap();
        let in_a = library.add_photo(a, "Cat", "/cat.jpg").unwrap();
        let in_b = library.add_photo(b, "Cat", "/cat.jpg").unwrap();
        assert_eq!(in_a, in_b);

        library.add_tag(in_a, tag("Person", "Tom")).unwrap();
        let (_, photo) = library.photos_in(b).next().unwrap();
        assert_eq!(photo.tags_as_strings(), vec!["Person: Tom".to_string()]);
        assert_eq!(library.albums_containing(in_a), vec![a, b]);
    }

    #[test]
    fn test_remove_photo_drops_orphans_only() {
        let (mut library, a) = library_with_album("A");
        let b = library.create_album("B").unwrap();
        let shared = library.add_photo(a, "", "/shared.jpg").unwrap();
        library.add_photo(b, "", "/shared.jpg").unwrap();
        let solo = library.add_photo(a, "", "/solo.jpg").unwrap();

        assert!(library.remove_photo(a, shared));
        assert!(library.photo(shared).is_some());
        assert!(library.remove_photo(a, solo));
        assert!(library.photo(solo).is_none());
        assert!(!library.remove_photo(a, solo));
    }

    #[test]
    fn test_move_photo() {
        let (mut library, a) = library_with_album("A");
        let b = library.create_album("B").unwrap();
        let photo = library.add_photo(a, "", "/p.jpg").unwrap();

        library.move_photo(photo, a, b).unwrap();
        assert!(!library.album(a).unwrap().contains(photo));
        assert!(library.album(b).unwrap().contains(photo));
        assert!(library.photo(photo).is_some());
    }

    #[test]
    fn test_move_into_album_holding_photo_is_rejected() {
        let (mut library, a) = library_with_album("A");
        let b = library.create_album("B").unwrap();
        let photo = library.add_photo(a, "", "/p.jpg").unwrap();
        library.add_photo(b, "", "/p.jpg").unwrap();

        assert_eq!(
            library.move_photo(photo, a, b),
            Err(LibraryError::PhotoAlreadyInAlbum { album: "B".into() })
        );
        assert!(library.album(a).unwrap().contains(photo));
        assert_eq!(library.album(b).unwrap().photo_count(), 1);
    }

    #[test]
    fn test_move_photo_rejections() {
        let (mut library, a) = library_with_album("A");
        let b = library.create_album("B").unwrap();
        let photo = library.add_photo(a, "", "/p.jpg").unwrap();

        assert_eq!(library.move_photo(photo, a, a), Err(LibraryError::SameAlbum));
        assert_eq!(
            library.move_photo(photo, b, a),
            Err(LibraryError::PhotoNotInAlbum { album: "B".into() })
        );
        assert_eq!(
            library.move_photo(PhotoId::new(42), a, b),
            Err(LibraryError::PhotoNotFound(PhotoId::new(42)))
        );
        assert!(library.album(a).unwrap().contains(photo));
    }

    #[test]
    fn test_remove_album_drops_unshared_photos() {
        let (mut library, a) = library_with_album("A");
        let b = library.create_album("B").unwrap();
        let only_a = library.add_photo(a, "", "/only-a.jpg").unwrap();
        let shared = library.add_photo(a, "", "/shared.jpg").unwrap();
        library.add_photo(b, "", "/shared.jpg").unwrap();
        library.set_current_album(Some(a));
        library.set_current_photo(Some(only_a));

        let removed = library.remove_album(a).unwrap();
        assert_eq!(removed.name(), "A");
        assert!(library.find_album("A").is_none());
        assert!(library.photo(only_a).is_none());
        assert!(library.photo(shared).is_some());
        assert_eq!(library.current_album(), None);
        assert_eq!(library.current_photo(), None);
        assert!(library.remove_album(a).is_none());
    }

    #[test]
    fn test_selection_is_a_hint() {
        let (mut library, a) = library_with_album("A");
        library.set_current_album(Some(a));
        assert_eq!(library.current_album(), Some(a));

        library.set_current_album(Some(AlbumId::new(77)));
        assert_eq!(library.current_album(), None);
        library.set_current_album(None);
        assert_eq!(library.album_count(), 1);
    }

    #[test]
    fn test_set_caption() {
        let (mut library, a) = library_with_album("A");
        let photo = library.add_photo(a, "old", "/p.jpg").unwrap();
        library.set_caption(photo, " new ").unwrap();
        assert_eq!(library.photo(photo).unwrap().caption(), "new");
        assert_eq!(library.set_caption(photo, ""), Err(LibraryError::EmptyCaption));
    }

    #[test]
    fn test_set_locator_keeps_locators_unique() {
        let (mut library, a) = library_with_album("A");
        let p1 = library.add_photo(a, "", "/1.jpg").unwrap();
        library.add_photo(a, "", "/2.jpg").unwrap();

        assert_eq!(
            library.set_locator(p1, "/2.jpg"),
            Err(LibraryError::DuplicateLocator("/2.jpg".into()))
        );
        assert!(library.set_locator(p1, "/1.jpg").is_ok());
        library.set_locator(p1, "/3.jpg").unwrap();
        assert_eq!(library.find_photo("/3.jpg"), Some(p1));
        assert_eq!(library.find_photo("/1.jpg"), None);
    }

    #[test]
    fn test_tagging_is_idempotent() {
        let (mut library, a) = library_with_album("A");
        let photo = library.add_photo(a, "", "/p.jpg").unwrap();

        assert!(library.add_tag(photo, tag("Location", "Maze")).unwrap());
        assert!(!library.add_tag(photo, tag("Location", "Maze")).unwrap());
        assert_eq!(library.photo(photo).unwrap().tags().len(), 1);
        assert!(library.remove_tag(photo, &tag("Location", "Maze")).unwrap());
        assert_eq!(
            library.add_tag(PhotoId::new(9), tag("Location", "Maze")),
            Err(LibraryError::PhotoNotFound(PhotoId::new(9)))
        );
    }

    #[test]
    fn test_tag_types() {
        let (mut library, a) = library_with_album("A");
        let photo = library.add_photo(a, "", "/p.jpg").unwrap();
        library.add_tag(photo, tag("Person", "Inky")).unwrap();
        library.add_tag(photo, tag("Location", "Maze")).unwrap();
        library.add_tag(photo, tag("Person", "Clyde")).unwrap();
        assert_eq!(library.tag_types(), vec!["Location".to_string(), "Person".to_string()]);
    }

    #[test]
    fn test_add_samples() {
        let (mut library, a) = library_with_album("Arcade");
        assert_eq!(library.add_samples(a).unwrap(), 5);
        assert_eq!(library.add_samples(a).unwrap(), 0);

        let captions: Vec<&str> = library.photos_in(a).map(|(_, p)| p.caption()).collect();
        assert_eq!(captions, vec!["Pac-Man", "Blinky", "Pinky", "Inky", "Clyde"]);
    }

    #[test]
    fn test_integrity_of_fresh_library() {
        let (mut library, a) = library_with_album("A");
        library.add_samples(a).unwrap();
        assert!(library.check_integrity().is_ok());
        assert_eq!(library.prune_orphans(), 0);
    }
}
