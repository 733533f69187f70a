//! Internal macros.

/// Generates getter, setter and presence checks for the link fields of
/// [`Node`](crate::types::Node). A link holds [`NULL_NODE`](crate::types::NULL_NODE)
/// when absent.
macro_rules! node_links {
    ($($link:ident),+ $(,)?) => {
        paste::paste! {
            impl $crate::types::Node {
                $(
                    /// Returns the link, or `NULL_NODE` if absent.
                    #[inline]
                    pub fn $link(&self) -> $crate::types::NodeId {
                        self.$link
                    }

                    #[inline]
                    pub(crate) fn [<set_ $link>](&mut self, id: $crate::types::NodeId) {
                        self.$link = id;
                    }

                    /// Returns true if the link is present.
                    #[inline]
                    pub fn [<has_ $link>](&self) -> bool {
                        self.$link != $crate::types::NULL_NODE
                    }
                )+
            }
        }
    };
}
