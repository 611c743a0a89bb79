//! The playlist tree. This is a plain, unbalanced BST with exclusively
//! owned nodes - each child is a `Box` held by its parent, so dropping
//! the tree (or calling [`Playlist::clear`]) releases every node.
//!
//! Operations that can fail (inserting a blank song, removing a song
//! that isn't there, looking up a miss) all report through `bool`
//! returns. Nothing in here panics for any reachable tree state.
//!
//! # Examples
//!
//! ```
//! use playlist::Playlist;
//!
//! let mut playlist = Playlist::new();
//!
//! // Nothing in here yet.
//! assert!(playlist.is_empty());
//! assert_eq!(playlist.height(), 0);
//!
//! playlist.insert("My Favorite Things", "John Coltrane");
//! playlist.insert("Not Like Us", "Sadab");
//!
//! assert_eq!(playlist.len(), 2);
//! assert!(playlist.contains("Not Like Us", "Sadab"));
//!
//! // Removal misses are reported, not raised.
//! assert!(!playlist.remove("Not Afraid", "Eminem"));
//! assert!(playlist.remove("Not Like Us", "Sadab"));
//! assert_eq!(playlist.len(), 1);
//! ```

use std::cmp::Ordering;

/// One song in a [`Playlist`]. Traversals hand back owned `Song`s, so
/// holding on to one never aliases into the tree it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    /// Title of the song.
    pub title: String,
    /// Name of the performing artist.
    pub artist: String,
}

impl Song {
    fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_owned(),
            artist: artist.to_owned(),
        }
    }

    /// The sort key for this song: title and artist run together into
    /// one string. All ordering and equality decisions in the tree go
    /// through this, never through the fields separately.
    fn key(&self) -> String {
        compose_key(&self.title, &self.artist)
    }
}

fn compose_key(title: &str, artist: &str) -> String {
    let mut key = String::with_capacity(title.len() + artist.len());
    key.push_str(title);
    key.push_str(artist);
    key
}

/// An owned pointer to a subtree. `None` is the empty subtree.
type Link = Option<Box<Node>>;

#[derive(Clone, Debug)]
struct Node {
    song: Song,
    left: Link,
    right: Link,
}

impl Node {
    fn new(song: Song) -> Self {
        Self {
            song,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn key(&self) -> String {
        self.song.key()
    }
}

/// A playlist of songs stored as an unbalanced Binary Search Tree,
/// ordered by the concatenation of each song's title and artist.
/// See the [crate docs](crate) for the invariants.
///
/// Cloning a `Playlist` is a deep copy: every node is duplicated and
/// the clone shares nothing with the original. Moving one out of a
/// binding while leaving an empty, usable tree behind is spelled
/// [`std::mem::take`].
///
/// # Examples
///
/// ```
/// use playlist::Playlist;
///
/// let mut original = Playlist::new();
/// original.insert("Nights", "Frank Ocean");
///
/// let copy = original.clone();
/// original.clear();
///
/// // The copy is unaffected by what happens to the original.
/// assert!(original.is_empty());
/// assert!(copy.contains("Nights", "Frank Ocean"));
///
/// // "Move, leaving empty" is just `mem::take`.
/// let mut source = copy;
/// let moved = std::mem::take(&mut source);
/// assert!(source.is_empty());
/// assert_eq!(moved.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Playlist {
    root: Link,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl Playlist {
    /// Generates a new, empty `Playlist`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the playlist holds no songs. O(1).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds a song to the playlist. Returns `false` - and changes
    /// nothing - if either the title or the artist is the empty string.
    /// That is the only validation there is: inserting the same song
    /// twice succeeds twice and stores two nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use playlist::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    ///
    /// assert!(playlist.insert("Espresso", "Sabrina Carpenter"));
    /// assert!(playlist.insert("Espresso", "Sabrina Carpenter"));
    /// assert_eq!(playlist.len(), 2);
    ///
    /// assert!(!playlist.insert("", "Sabrina Carpenter"));
    /// assert!(!playlist.insert("Espresso", ""));
    /// assert_eq!(playlist.len(), 2);
    /// ```
    pub fn insert(&mut self, title: &str, artist: &str) -> bool {
        if title.is_empty() || artist.is_empty() {
            return false;
        }
        let song = Song::new(title, artist);
        let key = song.key();
        place(&mut self.root, song, &key);
        true
    }

    /// Returns `true` if a song with exactly this title and artist is
    /// in the playlist.
    ///
    /// # Examples
    ///
    /// ```
    /// use playlist::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.insert("Humble", "Kendrick Lamar");
    ///
    /// assert!(playlist.contains("Humble", "Kendrick Lamar"));
    /// assert!(!playlist.contains("Humble", "Someone Else"));
    /// ```
    pub fn contains(&self, title: &str, artist: &str) -> bool {
        contains_key(&self.root, &compose_key(title, artist))
    }

    /// Removes one song with this title and artist from the playlist.
    /// Returns `false` - and changes nothing - if no such song is
    /// stored. When the song was inserted more than once, a single
    /// call removes a single copy.
    ///
    /// A node with two children is not detached: it absorbs the song
    /// of its in-order successor (the leftmost node of its right
    /// subtree) and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use playlist::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.insert("Not Like Us", "Sadab");
    /// playlist.insert("My Favorite Things", "John Coltrane");
    /// playlist.insert("Not Afraid", "MnMs");
    ///
    /// assert!(playlist.remove("Not Afraid", "MnMs"));
    /// assert!(!playlist.remove("Not Afraid", "Eminem"));
    /// assert_eq!(playlist.len(), 2);
    /// ```
    pub fn remove(&mut self, title: &str, artist: &str) -> bool {
        remove_value(&mut self.root, &compose_key(title, artist))
    }

    /// Discards every song, leaving the playlist empty. Song copies
    /// previously returned by the traversals stay valid - they were
    /// owned copies to begin with.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// The height of the tree: 0 when empty, 1 for a single node, and
    /// in general one more than the taller subtree under the root.
    /// Recomputed on every call by walking the whole tree - O(n), not
    /// cached.
    pub fn height(&self) -> usize {
        height_of(&self.root)
    }

    /// The number of songs stored, counted by walking the whole tree.
    /// Duplicates count once per copy.
    pub fn len(&self) -> usize {
        count(&self.root)
    }

    /// Every song in pre-order (node, then left subtree, then right
    /// subtree), as a freshly built vector of copies. An empty
    /// playlist yields an empty vector.
    pub fn preorder(&self) -> Vec<Song> {
        let mut songs = Vec::with_capacity(self.len());
        preorder_into(&self.root, &mut songs);
        songs
    }

    /// Every song in in-order (left subtree, then node, then right
    /// subtree). By the BST invariants this comes out sorted,
    /// non-decreasing by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use playlist::Playlist;
    ///
    /// let mut playlist = Playlist::new();
    /// playlist.insert("B", "x");
    /// playlist.insert("A", "x");
    /// playlist.insert("C", "x");
    ///
    /// let titles: Vec<_> = playlist.inorder().into_iter().map(|s| s.title).collect();
    /// assert_eq!(titles, ["A", "B", "C"]);
    /// ```
    pub fn inorder(&self) -> Vec<Song> {
        let mut songs = Vec::with_capacity(self.len());
        inorder_into(&self.root, &mut songs);
        songs
    }

    /// Every song in post-order (left subtree, then right subtree,
    /// then node).
    pub fn postorder(&self) -> Vec<Song> {
        let mut songs = Vec::with_capacity(self.len());
        postorder_into(&self.root, &mut songs);
        songs
    }
}

/// Recursively finds the spot for a new song. A node whose key is
/// strictly greater than the new key sends the song left; everything
/// else - including an exactly equal key - sends it right. That `else`
/// is where duplicates pile up.
fn place(link: &mut Link, song: Song, key: &str) {
    match link {
        None => *link = Some(Box::new(Node::new(song))),
        Some(node) => {
            if node.key().as_str() > key {
                place(&mut node.left, song, key);
            } else {
                place(&mut node.right, song, key);
            }
        }
    }
}

fn contains_key(link: &Link, key: &str) -> bool {
    match link {
        None => false,
        Some(node) => match node.key().as_str().cmp(key) {
            Ordering::Equal => true,
            Ordering::Less => contains_key(&node.right, key),
            Ordering::Greater => contains_key(&node.left, key),
        },
    }
}

/// Descends to the node holding `key` and removes it, reporting whether
/// anything was found. The descent mirrors [`place`]: strictly greater
/// goes left, otherwise right - so of several equal-keyed nodes this
/// reaches the topmost one first.
fn remove_value(link: &mut Link, key: &str) -> bool {
    let Some(node) = link else { return false };
    match node.key().as_str().cmp(key) {
        Ordering::Equal => {
            remove_node(link);
            true
        }
        Ordering::Greater => remove_value(&mut node.left, key),
        Ordering::Less => remove_value(&mut node.right, key),
    }
}

/// Detaches the node at `link` from the tree. A leaf just drops; a node
/// with one child is replaced by that child; a node with two children
/// keeps its place but takes over the song of its in-order successor,
/// whose own node is then removed (cascading through the leaf or
/// one-child case).
fn remove_node(link: &mut Link) {
    let Some(mut node) = link.take() else { return };
    if node.is_leaf() {
        // Dropping the node is the whole removal.
    } else if node.left.is_none() {
        *link = node.right.take();
    } else if node.right.is_none() {
        *link = node.left.take();
    } else {
        node.song = take_leftmost(&mut node.right);
        *link = Some(node);
    }
}

/// Copies the song out of the leftmost node of this subtree, removes
/// that node, and returns the song.
fn take_leftmost(link: &mut Link) -> Song {
    let node = link
        .as_mut()
        .expect("two-child removal implies a right subtree");
    if node.left.is_some() {
        take_leftmost(&mut node.left)
    } else {
        let song = node.song.clone();
        remove_node(link);
        song
    }
}

fn height_of(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + height_of(&node.left).max(height_of(&node.right)),
    }
}

fn count(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

fn preorder_into(link: &Link, songs: &mut Vec<Song>) {
    if let Some(node) = link {
        songs.push(node.song.clone());
        preorder_into(&node.left, songs);
        preorder_into(&node.right, songs);
    }
}

fn inorder_into(link: &Link, songs: &mut Vec<Song>) {
    if let Some(node) = link {
        inorder_into(&node.left, songs);
        songs.push(node.song.clone());
        inorder_into(&node.right, songs);
    }
}

fn postorder_into(link: &Link, songs: &mut Vec<Song>) {
    if let Some(node) = link {
        postorder_into(&node.left, songs);
        postorder_into(&node.right, songs);
        songs.push(node.song.clone());
    }
}
