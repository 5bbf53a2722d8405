use std::cell::Cell;
use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::entry::ImageHandle;
use crate::notify::Level;

/// Image table double that counts lookups.
#[derive(Default)]
struct TestImages {
	names: HashSet<String>,
	handles: HashSet<ImageHandle>,
	lookups: Cell<usize>,
}

impl TestImages {
	fn with_names(names: &[&str]) -> Self {
		Self {
			names: names.iter().map(|n| n.to_string()).collect(),
			..Self::default()
		}
	}

	fn delete(&mut self, name: &str) {
		self.names.remove(name);
	}
}

impl ResourceResolver for TestImages {
	type Resource = ImageRef;

	fn resolve(&self, reference: &ImageRef) -> Option<ImageRef> {
		self.lookups.set(self.lookups.get() + 1);
		let live = match reference {
			ImageRef::Name(name) => self.names.contains(name),
			ImageRef::Handle(handle) => self.handles.contains(handle),
		};
		live.then(|| reference.clone())
	}
}

#[derive(Default)]
struct TestView {
	active: Option<ImageRef>,
	notifications: Vec<Notification>,
}

impl ActiveImageHost for TestView {
	type Resource = ImageRef;

	fn set_active_image(&mut self, image: ImageRef) {
		self.active = Some(image);
	}

	fn notify(&mut self, notification: Notification) {
		self.notifications.push(notification);
	}
}

fn registry_of(names: &[&str]) -> FavoritesRegistry {
	let mut registry = FavoritesRegistry::new();
	for name in names {
		registry.add(*name);
	}
	registry
}

fn names(registry: &FavoritesRegistry) -> Vec<String> {
	registry.iter().map(|e| e.reference.to_string()).collect()
}

#[test]
fn add_appends_in_order() {
	let mut registry = FavoritesRegistry::new();
	assert!(registry.is_empty());

	assert_eq!(registry.add("a.png"), 0);
	assert_eq!(registry.add("b.png"), 1);

	assert_eq!(registry.len(), 2);
	assert_eq!(registry.get(0).unwrap().reference, ImageRef::name("a.png"));
	assert_eq!(registry.get(1).unwrap().reference, ImageRef::name("b.png"));
}

#[test]
fn add_keeps_duplicates() {
	let registry = registry_of(&["a.png", "a.png"]);
	assert_eq!(registry.len(), 2);
	assert_eq!(registry.get(0), registry.get(1));
}

#[test]
fn remove_shifts_later_entries_down() {
	let mut registry = registry_of(&["A", "B", "C"]);

	let removed = registry.remove_at(1).unwrap();

	assert_eq!(removed.reference, ImageRef::name("B"));
	assert_eq!(registry.len(), 2);
	assert_eq!(names(&registry), vec!["A", "C"]);
}

#[test]
fn entries_round_trip_through_from_entries() {
	let saved = registry_of(&["A", "B", "A"]);

	let restored = FavoritesRegistry::from_entries(saved.entries().iter().cloned());

	assert_eq!(restored.entries(), saved.entries());
	assert_eq!(restored.entries()[2], FavoriteEntry::new(ImageRef::name("A")));
	assert!(FavoritesRegistry::from_entries([]).entries().is_empty());
}

#[rstest]
#[case::at_len(3)]
#[case::past_len(4)]
#[case::max(usize::MAX)]
fn remove_out_of_range_leaves_registry_untouched(#[case] index: usize) {
	let mut registry = registry_of(&["A", "B", "C"]);
	let before = registry.clone();

	let err = registry.remove_at(index).unwrap_err();

	assert_eq!(err, RegistryError::IndexOutOfRange { index, len: 3 });
	assert_eq!(registry, before);
}

#[rstest]
#[case::empty(&[], 0)]
#[case::at_len(&["A"], 1)]
#[case::max(&["A", "B"], usize::MAX)]
fn get_out_of_range_is_an_error(#[case] entries: &[&str], #[case] index: usize) {
	let registry = registry_of(entries);
	assert!(matches!(
		registry.get(index),
		Err(RegistryError::IndexOutOfRange { .. })
	));
}

#[test]
fn only_clean_looks_up_images() {
	let images = TestImages::with_names(&["a.png", "b.png"]);
	let mut registry = FavoritesRegistry::new();

	registry.add("a.png");
	registry.add("missing.png");
	assert_eq!(images.lookups.get(), 0);

	registry.clean(&images);
	assert_eq!(images.lookups.get(), 2);

	registry.add("b.png");
	registry.add("gone.png");
	registry.get(2).unwrap();
	registry.remove_at(2).unwrap();
	assert_eq!(images.lookups.get(), 2);

	registry.clean(&images);
	assert_eq!(images.lookups.get(), 4);
	assert_eq!(names(&registry), vec!["a.png", "b.png"]);
}

#[test]
fn broken_entries_are_kept_until_clean() {
	let images = TestImages::with_names(&[]);
	let registry = registry_of(&["gone.png"]);

	assert_eq!(registry.state(0, &images).unwrap(), EntryState::Broken);
	assert_eq!(registry.len(), 1);
}

#[test]
fn state_follows_host_between_calls() {
	let mut images = TestImages::with_names(&["a.png"]);
	let registry = registry_of(&["a.png"]);

	assert_eq!(registry.state(0, &images).unwrap(), EntryState::Resolvable);
	images.delete("a.png");
	assert_eq!(registry.state(0, &images).unwrap(), EntryState::Broken);
	images.names.insert("a.png".into());
	assert_eq!(registry.state(0, &images).unwrap(), EntryState::Resolvable);
}

#[test]
fn handle_references_resolve_through_handles() {
	let mut images = TestImages::default();
	images.handles.insert(ImageHandle(7));
	let mut registry = FavoritesRegistry::new();
	registry.add(ImageHandle(7));
	registry.add(ImageHandle(8));

	assert_eq!(registry.state(0, &images).unwrap(), EntryState::Resolvable);
	assert_eq!(registry.state(1, &images).unwrap(), EntryState::Broken);
}

#[test]
fn set_active_switches_host_view() {
	let images = TestImages::with_names(&["a.png", "b.png"]);
	let registry = registry_of(&["a.png", "b.png"]);
	let mut view = TestView::default();

	let outcome = registry.set_active(1, &images, &mut view).unwrap();

	assert_eq!(outcome, SetActive::Activated(ImageRef::name("b.png")));
	assert_eq!(view.active, Some(ImageRef::name("b.png")));
	assert!(view.notifications.is_empty());
	assert_eq!(images.lookups.get(), 1);
}

#[test]
fn set_active_on_broken_entry_reports_and_keeps_view() {
	let images = TestImages::with_names(&["a.png"]);
	let registry = registry_of(&["a.png", "gone.png"]);
	let mut view = TestView::default();
	registry.set_active(0, &images, &mut view).unwrap();

	let outcome = registry.set_active(1, &images, &mut view).unwrap();

	assert_eq!(outcome, SetActive::Unresolved(ImageRef::name("gone.png")));
	assert!(!outcome.is_activated());
	assert_eq!(view.active, Some(ImageRef::name("a.png")));
	assert_eq!(view.notifications.len(), 1);
	assert_eq!(view.notifications[0].level, Level::Error);
	assert_eq!(view.notifications[0].message, "gone.png is not in images");
}

#[test]
fn set_active_out_of_range_does_not_resolve() {
	let images = TestImages::with_names(&["a.png"]);
	let registry = registry_of(&["a.png"]);
	let mut view = TestView::default();

	let err = registry.set_active(1, &images, &mut view).unwrap_err();

	assert_eq!(err, RegistryError::IndexOutOfRange { index: 1, len: 1 });
	assert_eq!(images.lookups.get(), 0);
	assert!(view.active.is_none());
}

#[test]
fn clean_removes_adjacent_broken_entries() {
	let images = TestImages::with_names(&["A", "B"]);
	let mut registry = registry_of(&["A", "gone-1", "gone-2", "B"]);

	assert_eq!(registry.clean(&images), 2);
	assert_eq!(names(&registry), vec!["A", "B"]);
	assert_eq!(images.lookups.get(), 4);
}

#[test]
fn clean_is_idempotent() {
	let images = TestImages::with_names(&["A"]);
	let mut registry = registry_of(&["gone", "A", "gone", "A"]);

	assert_eq!(registry.clean(&images), 2);
	assert_eq!(registry.clean(&images), 0);
	assert_eq!(names(&registry), vec!["A", "A"]);
}

#[test]
fn clean_on_empty_registry() {
	let images = TestImages::default();
	let mut registry = FavoritesRegistry::new();
	assert_eq!(registry.clean(&images), 0);
	assert_eq!(images.lookups.get(), 0);
}

#[test]
fn end_to_end_add_remove_clean() {
	let mut images = TestImages::with_names(&["img1", "img2"]);
	let mut registry = FavoritesRegistry::new();

	registry.add("img1");
	registry.add("img2");
	registry.remove_at(0).unwrap();
	assert_eq!(names(&registry), vec!["img2"]);

	images.delete("img2");
	assert_eq!(registry.clean(&images), 1);
	assert!(registry.is_empty());
}

#[test]
fn persisted_shape_is_a_list_of_references() {
	let mut registry = FavoritesRegistry::new();
	registry.add("a.png");
	registry.add(ImageHandle(3));

	let json = serde_json::to_value(&registry).unwrap();
	assert_eq!(
		json,
		serde_json::json!([
			{ "reference": { "name": "a.png" } },
			{ "reference": { "handle": 3 } },
		])
	);

	let back: FavoritesRegistry = serde_json::from_value(json).unwrap();
	assert_eq!(back, registry);
}

proptest! {
	/// Every added reference is readable back at its insertion index.
	#[test]
	fn prop_add_preserves_order(refs in prop::collection::vec("[a-z]{1,6}", 0..32)) {
		let mut registry = FavoritesRegistry::new();
		for name in &refs {
			registry.add(name.as_str());
		}

		prop_assert_eq!(registry.len(), refs.len());
		for (i, name) in refs.iter().enumerate() {
			prop_assert_eq!(&registry.get(i).unwrap().reference, &ImageRef::name(name.as_str()));
		}
	}

	/// Clean keeps exactly the live entries, in order, and a second pass is a no-op.
	#[test]
	fn prop_clean_keeps_live_entries(entries in prop::collection::vec(("[a-d]", any::<bool>()), 0..32)) {
		let mut images = TestImages::default();
		let mut registry = FavoritesRegistry::new();
		for (i, (name, live)) in entries.iter().enumerate() {
			let name = format!("{name}{i}");
			if *live {
				images.names.insert(name.clone());
			}
			registry.add(name);
		}
		let expected: Vec<String> = registry
			.iter()
			.map(|e| e.reference.to_string())
			.filter(|n| images.names.contains(n))
			.collect();

		let removed = registry.clean(&images);

		prop_assert_eq!(removed, entries.len() - expected.len());
		prop_assert_eq!(names(&registry), expected);
		prop_assert_eq!(registry.clean(&images), 0);
	}
}
