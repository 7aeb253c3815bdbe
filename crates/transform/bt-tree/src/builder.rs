//! Folder hierarchy construction from slash-delimited keys.

use bt_types::{Entry, FolderNode, Node};
use tracing::debug;

/// Build the folder hierarchy for `entries`.
///
/// Entries are processed in order. Each entry's base name is split on `/`
/// and walked from the root, creating folders that do not exist yet; the
/// entry is then stored under its name in the folder reached.
///
/// An entry whose key matches an earlier one replaces it in place, so the
/// last occurrence wins while the first occurrence's position is kept.
/// The same overwrite rule applies when a folder and a file compete for
/// one name (keys `a` and `a/b`): whichever is inserted later occupies the
/// slot.
pub fn build_tree<I>(entries: I) -> FolderNode
where
    I: IntoIterator<Item = Entry>,
{
    let mut root = FolderNode::root();
    for entry in entries {
        insert_entry(&mut root, entry);
    }
    root
}

fn insert_entry(root: &mut FolderNode, entry: Entry) {
    let segments: Vec<String> = entry.segments().map(str::to_string).collect();
    insert_at(root, &segments, entry);
}

/// Walk `segments` below `folder`, then store `entry` under its name.
///
/// A file sitting where a folder is needed is replaced by an empty folder.
fn insert_at(folder: &mut FolderNode, segments: &[String], entry: Entry) {
    let Some((segment, rest)) = segments.split_first() else {
        let name = entry.name().to_string();
        match folder.children.get(&name) {
            Some(Node::File(_)) => debug!(key = %entry.key(), "Replacing duplicate key"),
            Some(Node::Folder(_)) => debug!(key = %entry.key(), "File replaces folder of the same name"),
            None => {}
        }
        // An existing key keeps its position in the map
        folder.children.insert(name, Node::File(entry));
        return;
    };

    let path = format!("{}/{}", folder.path, segment);
    let depth = folder.depth + 1;
    let empty_folder = || {
        Node::Folder(FolderNode {
            name: segment.clone(),
            path: path.clone(),
            depth,
            children: Default::default(),
        })
    };

    let slot = folder
        .children
        .entry(segment.clone())
        .or_insert_with(empty_folder);
    if let Node::File(existing) = slot {
        debug!(key = %existing.key(), path = %path, "Folder replaces file of the same name");
        *slot = empty_folder();
    }
    if let Node::Folder(child) = slot {
        insert_at(child, rest, entry);
    }
}
