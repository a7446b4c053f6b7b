use arena_core::{Character, CharacterStatus};
use arena_runtime::{
    FavoritesRepository, FileFavoritesRepository, InMemoryFavoritesRepository, RepositoryError,
};

fn sample() -> Vec<Character> {
    vec![
        Character::new(2, "Morty Smith", "Human")
            .with_status(CharacterStatus::Alive)
            .with_image("https://rickandmortyapi.com/api/character/avatar/2.jpeg"),
        Character::new(1, "Rick Sanchez", "Human").with_status(CharacterStatus::Alive),
        Character::new(6, "Abadango Cluster Princess", "Alien"),
    ]
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileFavoritesRepository::in_dir(dir.path()).unwrap();

    assert!(repository.load().unwrap().is_empty());
    assert!(repository.path().ends_with("favorites.json"));
}

#[test]
fn saved_list_reloads_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileFavoritesRepository::in_dir(dir.path().join("nested/data")).unwrap();

    repository.save(&sample()).unwrap();
    assert_eq!(repository.load().unwrap(), sample());

    repository.save(&sample()[..1]).unwrap();
    assert_eq!(repository.load().unwrap(), sample()[..1].to_vec());

    let leftovers: Vec<_> = std::fs::read_dir(repository.path().parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("favorites.json")]);
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileFavoritesRepository::in_dir(dir.path()).unwrap();
    std::fs::write(repository.path(), "{ truncated").unwrap();

    assert!(matches!(repository.load(), Err(RepositoryError::Json(_))));
}

#[test]
fn in_memory_repository_replaces_the_list() {
    let repository = InMemoryFavoritesRepository::with_favorites(sample());
    assert_eq!(repository.load().unwrap().len(), 3);

    repository.save(&[]).unwrap();
    assert!(repository.load().unwrap().is_empty());
}
