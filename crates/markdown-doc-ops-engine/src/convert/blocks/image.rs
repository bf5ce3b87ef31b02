use crate::{
    convert::state::ConversionState,
    ops::{Dimension, ImageSize},
};

impl ConversionState<'_> {
    /// Inserts the image at the cursor. Its alt text is not written; an image
    /// without a URL is skipped.
    pub(in crate::convert) fn open_image(&mut self, url: &str) {
        let suppress_alt = self.image_depth > 0;
        self.image_depth += 1;
        if suppress_alt {
            return;
        }
        if url.trim().is_empty() {
            log::warn!("skipping image without a URL");
            return;
        }

        self.begin_item_content();
        let index = self.text.cursor();
        let size = self.default_image_size();
        self.log.insert_image(index, url.to_string(), size);
        self.text.skip(1, false);
    }

    fn default_image_size(&self) -> Option<ImageSize> {
        let defaults = &self.profile.image;
        if defaults.width_pt.is_none() && defaults.height_pt.is_none() {
            return None;
        }
        Some(ImageSize {
            width: defaults.width_pt.map(Dimension::pt),
            height: defaults.height_pt.map(Dimension::pt),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{MarkdownConverter, convert};
    use crate::ops::{Dimension, ImageSize, Operation};
    use markdown_doc_ops_config::{BackendProfile, ImageDefaults};
    use pretty_assertions::assert_eq;

    #[test]
    fn image_takes_one_unit_between_prose() {
        let ops = convert("a ![alt](https://x.example/p.png) b", 1).unwrap();
        assert_eq!(
            ops,
            vec![
                Operation::InsertText {
                    index: 1,
                    text: "a  b\n".into()
                },
                Operation::InsertInlineImage {
                    index: 3,
                    uri: "https://x.example/p.png".into(),
                    size: None,
                },
            ]
        );
    }

    #[test]
    fn image_without_url_is_skipped() {
        let ops = convert("![alt]()", 1).unwrap();
        assert_eq!(
            ops,
            vec![Operation::InsertText {
                index: 1,
                text: "\n".into()
            }]
        );
    }

    #[test]
    fn profile_size_is_requested() {
        let profile = BackendProfile {
            image: ImageDefaults {
                width_pt: Some(200.0),
                height_pt: None,
            },
            ..BackendProfile::default()
        };
        let ops = MarkdownConverter::new(profile)
            .convert("![](i.png)", 1)
            .unwrap();
        assert_eq!(
            ops[1],
            Operation::InsertInlineImage {
                index: 1,
                uri: "i.png".into(),
                size: Some(ImageSize {
                    width: Some(Dimension::pt(200.0)),
                    height: None,
                }),
            }
        );
    }
}
