//! Add/remove through the blocker; duplicates, missing selection, persistence.

mod common;

use hostblock::blocker::Blocker;
use hostblock::error::BlockerError;
use hostblock::platform::FileHostsEditor;
use hostblock::store::SiteListStore;

#[test]
fn duplicate_add_keeps_one_entry() {
    let dir = common::temp_home();
    let hosts = common::write_hosts(dir.path(), "");
    let editor = FileHostsEditor::new(&hosts);
    let store = SiteListStore::new(dir.path().join("blocked_sites.json"));
    let mut blocker = Blocker::open(store, &editor, "127.0.0.1").unwrap();

    blocker.add("www.example.com").unwrap();
    let err = blocker.add("www.example.com").unwrap_err();
    assert!(matches!(err, BlockerError::Duplicate(_)));
    assert_eq!(blocker.sites().len(), 1);
}

#[test]
fn invalid_add_is_rejected_and_not_persisted() {
    let dir = common::temp_home();
    let hosts = common::write_hosts(dir.path(), "");
    let editor = FileHostsEditor::new(&hosts);
    let store = SiteListStore::new(dir.path().join("blocked_sites.json"));
    let mut blocker = Blocker::open(store.clone(), &editor, "127.0.0.1").unwrap();

    let err = blocker.add("not a site").unwrap_err();
    assert!(matches!(err, BlockerError::InvalidFormat(_)));
    assert!(blocker.sites().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn remove_without_selection_leaves_list() {
    let dir = common::temp_home();
    let hosts = common::write_hosts(dir.path(), "");
    let editor = FileHostsEditor::new(&hosts);
    let store = SiteListStore::new(dir.path().join("blocked_sites.json"));
    let mut blocker = Blocker::open(store, &editor, "127.0.0.1").unwrap();
    blocker.add("a.com").unwrap();

    let err = blocker.remove(None).unwrap_err();
    assert!(matches!(err, BlockerError::NotSelected));
    assert_eq!(blocker.sites().len(), 1);

    let err = blocker.remove(Some("zzz.com")).unwrap_err();
    assert!(matches!(err, BlockerError::UnknownSite(_)));
    assert_eq!(blocker.sites().len(), 1);
}

#[test]
fn mutations_survive_reopen() {
    let dir = common::temp_home();
    let hosts = common::write_hosts(dir.path(), "");
    let editor = FileHostsEditor::new(&hosts);
    let store = SiteListStore::new(dir.path().join("blocked_sites.json"));

    {
        let mut blocker = Blocker::open(store.clone(), &editor, "127.0.0.1").unwrap();
        blocker.add("a.com").unwrap();
        blocker.add("www.b.com").unwrap();
        blocker.add("c.net").unwrap();
        assert_eq!(blocker.remove(Some("2")).unwrap(), "www.b.com");
    }

    let blocker = Blocker::open(store, &editor, "127.0.0.1").unwrap();
    let sites: Vec<&str> = blocker.sites().iter().collect();
    assert_eq!(sites, ["a.com", "c.net"]);
}
