/// A key-value pair stored in a tree node.
///
/// Entries carry no ordering of their own. The tree orders them through the comparator injected
/// at construction, so the key type is not required to implement `Ord`.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}
