use mandala_core::Path;

/// Position of a path in the emission sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(usize);

impl PathId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only arena of generated paths.
///
/// Paths are never removed or reordered: the index handed out by
/// [`PathBuffer::push`] is the global emission index that stroke jitter is
/// keyed on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuffer {
    paths: Vec<Path>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: Path) -> PathId {
        let id = PathId(self.paths.len());
        self.paths.push(path);
        id
    }

    pub fn extend<I: IntoIterator<Item = Path>>(&mut self, paths: I) {
        self.paths.extend(paths);
    }

    pub fn get(&self, id: PathId) -> Option<&Path> {
        self.paths.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathId, &Path)> {
        self.paths.iter().enumerate().map(|(i, p)| (PathId(i), p))
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandala_core::Point;

    #[test]
    fn test_ids_follow_emission_order() {
        let mut buffer = PathBuffer::new();
        let a = buffer.push(Path::circle(Point::ZERO, 1.0));
        buffer.extend([Path::circle(Point::ZERO, 2.0), Path::circle(Point::ZERO, 3.0)]);
        let d = buffer.push(Path::circle(Point::ZERO, 4.0));

        assert_eq!(a.index(), 0);
        assert_eq!(d.index(), 3);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.get(d), Some(&Path::circle(Point::ZERO, 4.0)));
        let ids: Vec<usize> = buffer.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
