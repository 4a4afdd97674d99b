use crate::path::{RoutingPath, RoutingPathSegment};
use std::collections::HashMap;
use std::sync::Arc;

/// Persistent routing trie keyed by path segments.
///
/// `insert` returns a new trie and leaves `self` untouched; unchanged subtrees are shared through
/// `Arc`, so a published trie can be read from any number of tasks without locking.
#[derive(Debug, Clone)]
pub struct Route<H> {
    children: HashMap<RoutingPathSegment, Arc<Route<H>>>,
    handler: Option<H>,
}

impl<H> Default for Route<H> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            handler: None,
        }
    }
}

impl<H: Clone> Route<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(&self, segment: &RoutingPathSegment) -> Option<&Route<H>> {
        self.children.get(segment).map(Arc::as_ref)
    }

    pub fn children(&self) -> impl Iterator<Item = (&RoutingPathSegment, &Route<H>)> {
        self.children.iter().map(|(k, v)| (k, v.as_ref()))
    }

    /// Binds `handler` at `path`, creating intermediate nodes as needed.
    ///
    /// Never fails. A handler already bound at `path` is replaced.
    pub fn insert(&self, path: &RoutingPath, handler: H) -> Route<H> {
        let Some(head) = path.head() else {
            return Route {
                children: self.children.clone(),
                handler: Some(handler),
            };
        };

        let child = match self.children.get(head) {
            Some(existing) => existing.insert(&path.tail(), handler),
            None => Route::new().insert(&path.tail(), handler),
        };

        let mut children = self.children.clone();
        children.insert(head.clone(), Arc::new(child));

        Route {
            children,
            handler: self.handler.clone(),
        }
    }

    /// Prefix match with ancestor fallback.
    ///
    /// Returns the handler of the deepest node along `path` that has one, paired with the part of
    /// `path` extending past that node. Returns `None` when no node on the way has a handler.
    pub fn lookup(&self, path: &RoutingPath) -> Option<(H, RoutingPath)> {
        let Some(head) = path.head() else {
            return self.handler.clone().map(|h| (h, RoutingPath::ROOT));
        };

        match self.children.get(head) {
            Some(child) => child.lookup(&path.tail()),
            None => self.handler.clone().map(|h| (h, path.clone())),
        }
    }

    /// Handler bound at exactly `path`, with no ancestor fallback.
    pub fn get(&self, path: &RoutingPath) -> Option<&H> {
        match path.head() {
            None => self.handler.as_ref(),
            Some(head) => self.child(head)?.get(&path.tail()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> RoutingPath {
        RoutingPath::parse(raw)
    }

    fn collect_paths<H: Clone>(route: &Route<H>, prefix: String, out: &mut Vec<String>) {
        for (segment, child) in route.children() {
            let child_path = format!("{}/{}", prefix, segment);
            out.push(child_path.clone());
            collect_paths(child, child_path, out);
        }
    }

    fn paths_of<H: Clone>(route: &Route<H>) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(route, String::new(), &mut out);
        out.sort();
        out
    }

    #[test]
    fn test_insert_creates_child_routes() {
        let cases: &[(&str, &[&str])] = &[
            ("/", &[]),
            ("/a", &["/a"]),
            ("/a/b", &["/a", "/a/b"]),
        ];

        for (raw, expected) in cases {
            let route = Route::new().insert(&path(raw), 1u8);
            assert_eq!(paths_of(&route), expected.to_vec(), "inserting {:?}", raw);
        }
    }

    #[test]
    fn test_insert_leaves_original_untouched() {
        let empty: Route<u8> = Route::new();
        let route = empty.insert(&path("/a"), 1);

        assert!(empty.lookup(&path("/a")).is_none());
        assert!(route.lookup(&path("/a")).is_some());
    }

    #[test]
    fn test_insert_overwrites_existing_handler() {
        let route = Route::new().insert(&path("/a"), 1u8).insert(&path("/a"), 2u8);

        let (handler, _) = route.lookup(&path("/a")).unwrap();
        assert_eq!(handler, 2);
    }

    #[test]
    fn test_insert_at_root_binds_root_handler() {
        let route = Route::new().insert(&RoutingPath::ROOT, 7u8);

        assert_eq!(route.get(&RoutingPath::ROOT), Some(&7));
        assert_eq!(route.lookup(&RoutingPath::ROOT), Some((7, RoutingPath::ROOT)));
    }

    #[test]
    fn test_lookup_known_route_has_empty_path_info() {
        let route = Route::new().insert(&path("/a"), 1u8);

        let (handler, path_info) = route.lookup(&path("/a")).unwrap();
        assert_eq!(handler, 1);
        assert!(path_info.is_root());
    }

    #[test]
    fn test_lookup_partial_match_falls_back_to_ancestor() {
        let route = Route::new().insert(&path("/a"), 1u8);

        let (handler, path_info) = route.lookup(&path("/a/b")).unwrap();
        assert_eq!(handler, 1);
        assert_eq!(path_info, path("/b"));

        let (handler, path_info) = route.lookup(&path("/a/b/c")).unwrap();
        assert_eq!(handler, 1);
        assert_eq!(path_info, path("/b/c"));
    }

    #[test]
    fn test_lookup_picks_deepest_ancestor() {
        let route = Route::new()
            .insert(&path("/a"), 1u8)
            .insert(&path("/a/b"), 2u8);

        assert_eq!(route.lookup(&path("/a/b/c")), Some((2, path("/c"))));
        assert_eq!(route.lookup(&path("/a/x")), Some((1, path("/x"))));
    }

    #[test]
    fn test_lookup_does_not_fall_back_past_handlerless_node() {
        // `/a` is an intermediate node without its own handler
        let route = Route::new().insert(&path("/a/b"), 1u8);

        assert!(route.lookup(&path("/a")).is_none());
        assert!(route.lookup(&path("/a/c")).is_none());
    }

    #[test]
    fn test_get_is_exact() {
        let route = Route::new().insert(&path("/a/b"), 1u8);

        assert_eq!(route.get(&path("/a/b")), Some(&1));
        assert_eq!(route.get(&path("/a")), None);
        assert_eq!(route.get(&path("/a/b/c")), None);
    }

    #[test]
    fn test_lookup_unknown_route_is_none() {
        let route: Route<u8> = Route::new();
        assert!(route.lookup(&path("/a/b")).is_none());

        let route = Route::new().insert(&path("/livez"), 1u8);
        assert!(route.lookup(&path("/movies")).is_none());
        assert!(route.lookup(&path("/")).is_none());
    }
}
