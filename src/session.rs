use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::de::DeserializeOwned;
use crate::errors::SessionError;
use crate::models::memo::Memo;
use crate::store::KeyValueStore;

pub const MEMOS_KEY: &str = "MY_MEMOS";
pub const SELECTED_MEMO_KEY: &str = "MY_SELECTED_MEMO_ID";
pub const WALLPAPERS_KEY: &str = "MY_BG_LIST";
pub const LOCK_ENABLED_KEY: &str = "IS_LOCK_ENABLED";

/// User settings: saved memos, the pinned memo, wallpapers and the lock flag.
///
/// Every change goes through a method that also writes the affected keys to the given store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    memos: Vec<Memo>,
    selected_memo_id: Option<String>,
    wallpapers: Vec<String>,
    lock_enabled: bool,
}

impl Session {
    /// Loads the session from the store.
    /// A selected memo id that no longer matches any memo is dropped from the store.
    ///
    /// # Arguments
    ///
    /// * 'store' - the key-value store holding the settings
    pub fn load(store: &mut dyn KeyValueStore) -> Result<Session, SessionError> {
        let memos: Vec<Memo> = read_json(store, MEMOS_KEY)?.unwrap_or_default();
        let wallpapers: Vec<String> = read_json(store, WALLPAPERS_KEY)?.unwrap_or_default();
        let lock_enabled: bool = read_json(store, LOCK_ENABLED_KEY)?.unwrap_or(false);

        let selected_memo_id = match store.get(SELECTED_MEMO_KEY)? {
            Some(id) if !memos.iter().any(|m| m.id == id) => {
                warn!("selected memo {} no longer exists, clearing selection", id);
                store.remove(SELECTED_MEMO_KEY)?;
                None
            }
            stored => stored,
        };

        Ok(Session { memos, selected_memo_id, wallpapers, lock_enabled })
    }

    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn selected_memo_id(&self) -> Option<&str> {
        self.selected_memo_id.as_deref()
    }

    pub fn wallpapers(&self) -> &[String] {
        &self.wallpapers
    }

    pub fn lock_enabled(&self) -> bool {
        self.lock_enabled
    }

    /// Returns the text of the pinned memo, or an empty string if none is pinned
    pub fn pinned_memo_text(&self) -> &str {
        self.selected_memo_id
            .as_ref()
            .and_then(|id| self.memos.iter().find(|m| &m.id == id))
            .map_or("", |m| m.content.as_str())
    }

    /// Appends a new memo, blank text is ignored.
    /// The memo id is the millisecond timestamp of `now`. The first memo of an empty list is pinned.
    ///
    /// # Arguments
    ///
    /// * 'store' - the key-value store holding the settings
    /// * 'text' - memo content
    /// * 'now' - creation time
    pub fn add_memo(&mut self, store: &mut dyn KeyValueStore, text: &str, now: DateTime<Utc>)
        -> Result<Option<Memo>, SessionError> {

        if text.trim().is_empty() {
            return Ok(None);
        }

        let memo = Memo { id: now.timestamp_millis().to_string(), content: text.to_string() };
        let mut memos = self.memos.clone();
        memos.push(memo.clone());
        write_json(store, MEMOS_KEY, &memos)?;
        self.memos = memos;
        info!("added memo {}", memo.id);

        if self.memos.len() == 1 {
            store.set(SELECTED_MEMO_KEY, &memo.id)?;
            self.selected_memo_id = Some(memo.id.clone());
            info!("pinned first memo {}", memo.id);
        }

        Ok(Some(memo))
    }

    /// Deletes a memo, clearing the selection if it was the pinned one
    ///
    /// # Arguments
    ///
    /// * 'store' - the key-value store holding the settings
    /// * 'id' - id of the memo to delete
    pub fn delete_memo(&mut self, store: &mut dyn KeyValueStore, id: &str) -> Result<(), SessionError> {
        if !self.memos.iter().any(|m| m.id == id) {
            return Err(SessionError::UnknownMemo(id.to_string()));
        }

        let memos = self.memos.iter().filter(|m| m.id != id).cloned().collect::<Vec<Memo>>();
        write_json(store, MEMOS_KEY, &memos)?;
        self.memos = memos;

        if self.selected_memo_id.as_deref() == Some(id) {
            store.remove(SELECTED_MEMO_KEY)?;
            self.selected_memo_id = None;
        }
        info!("deleted memo {}", id);

        Ok(())
    }

    /// Pins a memo, or unpins it if it already is the pinned one
    ///
    /// # Arguments
    ///
    /// * 'store' - the key-value store holding the settings
    /// * 'id' - id of the memo to toggle
    pub fn select_memo(&mut self, store: &mut dyn KeyValueStore, id: &str) -> Result<Option<&str>, SessionError> {
        if !self.memos.iter().any(|m| m.id == id) {
            return Err(SessionError::UnknownMemo(id.to_string()));
        }

        if self.selected_memo_id.as_deref() == Some(id) {
            store.remove(SELECTED_MEMO_KEY)?;
            self.selected_memo_id = None;
        } else {
            store.set(SELECTED_MEMO_KEY, id)?;
            self.selected_memo_id = Some(id.to_string());
        }

        Ok(self.selected_memo_id())
    }

    /// Appends wallpapers, duplicates are kept
    ///
    /// # Arguments
    ///
    /// * 'store' - the key-value store holding the settings
    /// * 'uris' - image URIs to add
    pub fn add_wallpapers(&mut self, store: &mut dyn KeyValueStore, uris: &[String]) -> Result<(), SessionError> {
        let mut wallpapers = self.wallpapers.clone();
        wallpapers.extend_from_slice(uris);
        write_json(store, WALLPAPERS_KEY, &wallpapers)?;
        self.wallpapers = wallpapers;
        info!("added {} wallpaper(s)", uris.len());

        Ok(())
    }

    /// Removes every wallpaper equal to any of the selected URIs
    ///
    /// # Arguments
    ///
    /// * 'store' - the key-value store holding the settings
    /// * 'selection' - image URIs to remove
    pub fn remove_wallpapers(&mut self, store: &mut dyn KeyValueStore, selection: &[String]) -> Result<usize, SessionError> {
        let wallpapers = self.wallpapers.iter()
            .filter(|w| !selection.contains(w))
            .cloned()
            .collect::<Vec<String>>();
        write_json(store, WALLPAPERS_KEY, &wallpapers)?;

        let removed = self.wallpapers.len() - wallpapers.len();
        self.wallpapers = wallpapers;
        info!("removed {} wallpaper(s)", removed);

        Ok(removed)
    }

    /// Turns the lock screen on or off
    ///
    /// # Arguments
    ///
    /// * 'store' - the key-value store holding the settings
    /// * 'enabled' - new value of the flag
    pub fn set_lock_enabled(&mut self, store: &mut dyn KeyValueStore, enabled: bool) -> Result<(), SessionError> {
        write_json(store, LOCK_ENABLED_KEY, &enabled)?;
        self.lock_enabled = enabled;

        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, SessionError> {
    match store.get(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| SessionError::Document { key: key.to_string(), msg: e.to_string() }),
        None => Ok(None),
    }
}

fn write_json<T: serde::Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<(), SessionError> {
    let json = serde_json::to_string(value)
        .map_err(|e| SessionError::Document { key: key.to_string(), msg: e.to_string() })?;
    store.set(key, &json)?;

    Ok(())
}
