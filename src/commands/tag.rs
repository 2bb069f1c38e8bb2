//! Tag and untag commands

use super::{Result, apply, find_photo};
use crate::cli::TagCommands;
use crate::config::AlbumrConfig;
use crate::model::{Tag, same_tag_type};
use crate::search::{SearchQuery, TagClause};
use crate::store::Session;
use crate::{AlbumrError, output};

/// Execute a tag subcommand
///
/// # Errors
/// Returns an error if the photo is not found or the tag is invalid or of a
/// type the configuration does not offer
pub fn execute(
    session: &mut Session,
    command: &TagCommands,
    config: &AlbumrConfig,
    quiet: bool,
) -> Result<()> {
    match command {
        TagCommands::Add {
            photo,
            tag_type,
            value,
        } => {
            if !config.allows_tag_type(tag_type) {
                return Err(AlbumrError::InvalidInput(format!(
                    "Unknown tag type '{}'. Configured types: {}",
                    tag_type.trim(),
                    config.tag_types.join(", ")
                )));
            }
            let id = find_photo(session.library(), photo)?;
            let tag = Tag::new(config.canonical_tag_type(tag_type), value)?;
            let label = tag.to_string();
            let added = apply(session, |library| library.add_tag(id, tag))?;
            if !quiet {
                if added {
                    println!("Tagged '{}' with {label}", photo.trim());
                } else {
                    println!("'{}' already has {label}", photo.trim());
                }
            }
            Ok(())
        }
        TagCommands::Remove {
            photo,
            tag_type,
            value,
        } => {
            let id = find_photo(session.library(), photo)?;
            let tag = Tag::new(config.canonical_tag_type(tag_type), value)?;
            let removed = apply(session, |library| library.remove_tag(id, &tag))?;
            if !quiet {
                if removed {
                    println!("Removed {tag} from '{}'", photo.trim());
                } else {
                    println!("'{}' has no tag {tag}", photo.trim());
                }
            }
            Ok(())
        }
        TagCommands::List { photo } => {
            let id = find_photo(session.library(), photo)?;
            let tags = session.library().photo(id).map(|p| p.tags()).unwrap_or_default();
            if tags.is_empty() && !quiet {
                println!("'{}' has no tags", photo.trim());
            }
            for tag in tags {
                if quiet {
                    println!("{tag}");
                } else {
                    println!("  {}", output::tag(tag));
                }
            }
            Ok(())
        }
        TagCommands::Types => {
            let library = session.library();
            let mut types = config.tag_types.clone();
            for in_use in library.tag_types() {
                if !types.iter().any(|t| same_tag_type(t, &in_use)) {
                    types.push(in_use);
                }
            }
            for tag_type in &types {
                let any_value = SearchQuery::single(TagClause::new(tag_type, ""));
                let count = library.search(&any_value).len();
                println!("{}", output::tag_type_with_count(tag_type, count, quiet));
            }
            Ok(())
        }
    }
}
