#![warn(missing_docs)]

//! # Word grids
//!
//! Generates square word search grids. Each word is hidden along one of six directions (left to right, top to
//! bottom, top-left to bottom-right, and the reverse of each), and every cell not taken by a word is filled with a
//! random uppercase letter.
//!
//! ```no_run
//! let words = [String::from("cat"), String::from("mouse")];
//! let word_search = word_grid::generate_grid(8, &words).unwrap();
//!
//! println!("{}", word_search);
//! ```

use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use rand::{seq::SliceRandom, Rng};
use tracing::{debug, trace};

/// A `(row, column)` coordinate in the grid.
pub type Cell = (usize, usize);

/// The grid a word search is built on while words are being placed. `None` marks a cell no word has claimed yet.
pub type WorkingGrid = Array2D<Option<char>>;

const FILL_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An error that happened when creating the word search.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The grid has to be at least one cell wide, and its cell count has to fit in a `usize`.
    #[error("grid size {0} is out of range")]
    InvalidGridSize(usize),
}

/// The direction a word is placed in inside the word search grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    Horizontal,

    /// Top to bottom.
    Vertical,

    /// Top-left to bottom-right.
    Diagonal,

    /// Right to left.
    HorizontalReverse,

    /// Bottom to top.
    VerticalReverse,

    /// Bottom-right to top-left.
    DiagonalReverse,
}

impl Direction {
    /// Every direction a word can be placed in.
    pub const ALL: [Direction; 6] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::HorizontalReverse,
        Direction::VerticalReverse,
        Direction::DiagonalReverse,
    ];

    /// The directions that read left to right or top to bottom.
    pub const FORWARD: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];

    /// The `(row, column)` step taken from one letter of a word to the next.
    pub fn delta(self) -> (isize, isize) {
        use Direction::*;

        match self {
            Horizontal => (0, 1),
            Vertical => (1, 0),
            Diagonal => (1, 1),
            HorizontalReverse => (0, -1),
            VerticalReverse => (-1, 0),
            DiagonalReverse => (-1, -1),
        }
    }

    /// Whether the direction reads right-to-left or bottom-to-top.
    pub fn is_reverse(self) -> bool {
        use Direction::*;

        matches!(self, HorizontalReverse | VerticalReverse | DiagonalReverse)
    }
}

/// Describes where a word's letters are placed in the word search grid. Includes a beginning coordinate, a length, and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    /// The cell holding the first letter of the word.
    pub begin: Cell,

    /// The length of the word that this WordSpan refers to.
    pub len: usize,

    /// The direction that the word goes in.
    pub direction: Direction,
}

impl WordSpan {
    /// Creates a new [WordSpan] with the given values for the beginning coordinate, the length, and the direction of the word.
    pub fn new(begin: Cell, len: usize, direction: Direction) -> Self {
        Self {
            begin,
            len,
            direction,
        }
    }

    /// Returns the cells the word spans across, in letter order.
    ///
    /// Only meaningful for spans that are [in bounds](WordSpan::in_bounds); steps that would leave the grid wrap
    /// around to huge indices rather than panicking.
    pub fn indices(&self) -> impl Iterator<Item = Cell> {
        let (row_step, column_step) = self.direction.delta();
        let (row, column) = self.begin;

        (0..self.len as isize).map(move |i| {
            (
                row.wrapping_add_signed(row_step * i),
                column.wrapping_add_signed(column_step * i),
            )
        })
    }

    /// Returns whether every cell of the span lies inside a `size` x `size` grid.
    pub fn in_bounds(&self, size: usize) -> bool {
        let (row_step, column_step) = self.direction.delta();

        axis_in_bounds(self.begin.0, row_step, self.len, size)
            && axis_in_bounds(self.begin.1, column_step, self.len, size)
    }
}

fn axis_in_bounds(start: usize, step: isize, len: usize, size: usize) -> bool {
    start < size
        && match step {
            1 => start + len <= size,
            -1 => start + 1 >= len,
            _ => true,
        }
}

/// Whether `word` can be written starting at `begin` and going in `direction` without leaving the grid or touching a
/// cell another word already claimed.
///
/// An empty word trivially fits anywhere inside the grid.
pub fn fits(grid: &WorkingGrid, word: &[char], begin: Cell, direction: Direction) -> bool {
    let span = WordSpan::new(begin, word.len(), direction);

    grid.num_rows() == grid.num_columns()
        && span.in_bounds(grid.num_rows())
        && span
            .indices()
            .all(|(row, column)| matches!(grid.get(row, column), Some(None)))
}

/// Tries `directions` in a random order and returns the first one `word` fits in from `begin`, or [`None`] if it
/// fits in none of them.
pub fn select_direction<R: Rng + ?Sized>(
    grid: &WorkingGrid,
    word: &[char],
    begin: Cell,
    directions: &[Direction],
    rng: &mut R,
) -> Option<Direction> {
    let mut directions = directions.to_vec();
    directions.shuffle(rng);

    directions
        .into_iter()
        .find(|&direction| fits(grid, word, begin, direction))
}

/// How many candidate starting cells are tried for each word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Only the first cell of the shuffled candidates is tried. If no direction fits there, the word is dropped.
    SingleAttempt,

    /// Candidates are tried in shuffled order until one of them fits. A word is only dropped when it fits nowhere.
    #[default]
    Exhaustive,
}

/// The configuration for the word search. See [`WordSearch::new`] for details.
#[derive(Clone, Copy, Debug)]
pub struct WordSearchConfig<'a> {
    /// The number of rows and columns of the square grid.
    pub size: usize,

    /// The list of words that will be hidden in the word search, in placement order.
    pub words: &'a [String],

    /// How hard to look for room for each word.
    pub strategy: PlacementStrategy,

    /// Whether backward-facing directions are allowed. Backward-facing directions are any direction that is read
    /// right-to-left or bottom-to-top.
    pub allow_backward_words: bool,
}

impl<'a> WordSearchConfig<'a> {
    /// A configuration using the exhaustive strategy and all six directions.
    pub fn new(size: usize, words: &'a [String]) -> Self {
        Self {
            size,
            words,
            strategy: PlacementStrategy::default(),
            allow_backward_words: true,
        }
    }

    fn directions(&self) -> &'static [Direction] {
        if self.allow_backward_words {
            &Direction::ALL
        } else {
            &Direction::FORWARD
        }
    }
}

/// A word search object that contains a grid of characters and a list of each word and their positions within the grid.
#[derive(Debug)]
pub struct WordSearch {
    grid: Array2D<char>,
    word_spans: Vec<(String, WordSpan)>,
    unplaced_words: Vec<String>,
}

impl WordSearch {
    /// Creates and generates a new word search with the specified configuration, using the thread-local random
    /// number generator.
    ///
    /// Words are uppercased and then placed one at a time in the order given. A word that can't be fit anywhere (for
    /// instance because it is longer than the grid) is left out and shows up in [`WordSearch::unplaced_words`]
    /// instead. Every remaining cell receives a random letter from `A` to `Z`.
    ///
    /// Words containing anything other than the letters `a` to `z` (in either case) could never be read back out of
    /// the grid, so they are skipped and reported as unplaced as well.
    ///
    /// Returns an [Error] if the grid size is zero or too large to allocate.
    pub fn new(config: &WordSearchConfig<'_>) -> Result<Self, Error> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Same as [`WordSearch::new`], drawing all randomness from `rng`. Seeding `rng` makes the layout reproducible.
    pub fn with_rng<R: Rng + ?Sized>(
        config: &WordSearchConfig<'_>,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let size = config.size;

        if size == 0 || size.checked_mul(size).is_none() {
            return Err(Error::InvalidGridSize(size));
        }

        let mut grid: WorkingGrid = Array2D::filled_with(None, size, size);
        let mut candidates: Vec<Cell> = (0..size)
            .flat_map(|row| (0..size).map(move |column| (row, column)))
            .collect();

        let mut word_spans = Vec::with_capacity(config.words.len());
        let mut unplaced_words = Vec::new();

        for word in config.words {
            let word = word.to_ascii_uppercase();

            if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
                debug!(word = %word, "word has characters other than letters, skipping");
                unplaced_words.push(word);
                continue;
            }

            let letters: Vec<char> = word.chars().collect();

            let span = Self::find_span(
                &grid,
                &letters,
                &mut candidates,
                config.directions(),
                config.strategy,
                rng,
            );

            match span {
                Some(span) => {
                    debug!(
                        word = %word,
                        row = span.begin.0,
                        column = span.begin.1,
                        direction = ?span.direction,
                        "placed word"
                    );

                    Self::place_word(&mut grid, &letters, &span);
                    word_spans.push((word, span));
                }
                None => {
                    debug!(word = %word, strategy = ?config.strategy, "no room for word, skipping");
                    unplaced_words.push(word);
                }
            }
        }

        let grid = Self::fill(grid, rng);

        Ok(Self {
            grid,
            word_spans,
            unplaced_words,
        })
    }

    fn find_span<R: Rng + ?Sized>(
        grid: &WorkingGrid,
        letters: &[char],
        candidates: &mut [Cell],
        directions: &[Direction],
        strategy: PlacementStrategy,
        rng: &mut R,
    ) -> Option<WordSpan> {
        // Writing zero letters changes nothing, so there is nothing to place.
        if letters.is_empty() {
            return None;
        }

        candidates.shuffle(rng);

        let candidates = match strategy {
            PlacementStrategy::SingleAttempt => &candidates[..1],
            PlacementStrategy::Exhaustive => &candidates[..],
        };

        candidates.iter().find_map(|&begin| {
            select_direction(grid, letters, begin, directions, rng)
                .map(|direction| WordSpan::new(begin, letters.len(), direction))
        })
    }

    fn place_word(grid: &mut WorkingGrid, letters: &[char], span: &WordSpan) {
        for (&ch, coord) in letters.iter().zip(span.indices()) {
            grid[coord] = Some(ch);
        }
    }

    fn fill<R: Rng + ?Sized>(grid: WorkingGrid, rng: &mut R) -> Array2D<char> {
        let size = grid.num_rows();
        let mut cells = grid.elements_row_major_iter();
        let mut filled = 0usize;

        let grid = Array2D::filled_by_row_major(
            || match cells.next().copied().flatten() {
                Some(ch) => ch,
                None => {
                    filled += 1;
                    char::from(FILL_LETTERS[rng.gen_range(0..FILL_LETTERS.len())])
                }
            },
            size,
            size,
        );

        trace!(filled, "filled empty cells with random letters");

        grid
    }

    /// The number of rows (and columns) in the word search grid.
    pub fn size(&self) -> usize {
        self.grid.num_rows()
    }

    /// Provides a reference to the inner word search grid.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Copies the grid out as a list of rows.
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.grid.as_rows()
    }

    /// Gets the character at the specified coordinate, returning [`Option::None`] if the coordinates are out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.grid.get(row, column).copied()
    }

    /// The uppercased words that made it into the grid, each with its location.
    pub fn word_spans(&self) -> &[(String, WordSpan)] {
        &self.word_spans
    }

    /// The uppercased words that could not be fit into the grid, in input order.
    pub fn unplaced_words(&self) -> &[String] {
        &self.unplaced_words
    }
}

/// Generates a `size` x `size` word search hiding `words`, trying every candidate cell for each word and allowing
/// all six directions.
pub fn generate_grid(size: usize, words: &[String]) -> Result<WordSearch, Error> {
    WordSearch::new(&WordSearchConfig::new(size, words))
}

impl Index<Cell> for WordSearch {
    type Output = char;

    fn index(&self, index: Cell) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for WordSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.grid.rows_iter() {
            let mut row = row.peekable();

            while let Some(ch) = row.next() {
                write!(f, "{}", ch)?;

                if row.peek().is_some() {
                    f.write_str(" ")?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
