//! The fixed tree printed by the demonstration binary.

use crate::error::Result;
use crate::item::{File, SymLink};
use crate::tree::Tree;

/// The demo tree together with a link to `/home/tim`.
#[derive(Debug)]
pub struct Sample {
    pub tree: Tree,
    pub link: SymLink,
}

/// Builds:
///
/// ```text
/// /
/// |-bin
/// |-home
///   |_tim
///     |_info.txt 100
///     |_data.in 0
///     |_data
/// ```
pub fn build() -> Result<Sample> {
    let mut tree = Tree::new("/");
    let root = tree.root();
    tree.add_directory(root, "bin")?;
    tree.add_directory(root, "home")?;

    let home = tree.navigate_path(root, ["home"])?;
    tree.add_directory(home, "tim")?;
    let tim = tree.navigate_path(home, ["tim"])?;
    tree.add_file(tim, File::with_size("info", "txt", 100))?;
    tree.add_file(tim, File::new("data", "in"))?;
    tree.add_directory(tim, "data")?;

    let name = tree.directory(tim)?.name().to_string();
    let link = tree.symlink(tim, name)?;
    Ok(Sample { tree, link })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn test_sample_shape() {
        let sample = build().unwrap();
        let tree = &sample.tree;
        assert_eq!(tree.size(tree.root()).unwrap(), 100);
        assert_eq!(tree.number_of_items(tree.root()).unwrap(), 2);
        assert_eq!(sample.link.name(), "tim");
        assert_eq!(sample.link.item_kind(), ItemKind::Directory);
    }
}
