use serde::ser::{Serialize, Serializer};

use crate::cursor::InputCursor;
use crate::view::{IteratorView, View};

impl<C> Serialize for IteratorView<C>
where
    C: InputCursor + Clone,
    C::Item: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::any_cursor::AnyForwardView;
    use crate::cursors::{iota, iter_view, SliceCursor};
    use crate::view::{IteratorView, View};

    #[test]
    fn test_serialize_view() {
        let data = [1.5f32, 2.0, 2.5];
        let view = IteratorView::new(SliceCursor::begin(&data), SliceCursor::end(&data));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json, json!([1.5, 2.0, 2.5]));

        let json = serde_json::to_value(iota(0..3)).unwrap();
        assert_eq!(json, json!([0, 1, 2]));

        let json = serde_json::to_value(iota(0..0)).unwrap();
        assert_eq!(json, json!([]));
    }

    #[test]
    fn test_serialize_erased_view() {
        let view: AnyForwardView<String> = iter_view(["x", "y"].map(String::from)).erase();
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
    }
}
