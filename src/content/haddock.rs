//! Haddock markup cheatsheet

use crate::domain::builder::{cheatsheet, CategoryBuilder};
use crate::domain::Cheatsheet;
use crate::error::ValidationError;

pub const KEYWORD: &str = "haddock";

/// Build the Haddock markup quick reference
pub fn haddock() -> std::result::Result<Cheatsheet, ValidationError> {
    cheatsheet(|c| {
        c.title("Haddock Markup Cheatsheet")
            .docset_file_name("Haddock")
            .keyword(KEYWORD)
            .introduction("Haddock Markup Quick Reference");

        c.category(top_level_documentation)
            .category(export_markup)
            .category(headings)
            .category(references)
            .category(code_blocks)
            .category(repl_examples)
            .category(properties)
            .category(hyperlinking)
            .category(text_markup)
            .category(external_references)
            .category(lists)
            .category(math)
            .category(metadata)
            .category(grids_and_tables)
            .category(configuration);

        c.notes(
            "Much of this content is ported from the official \
             [haddock](https://github.com/haskell/haddock) \
             [cheatsheet](https://github.com/haskell/haddock/blob/ghc-8.6/doc/cheatsheet/haddocks.md)",
        );
    })
}

fn top_level_documentation(cat: &mut CategoryBuilder) {
    cat.id("Top-Level Documentation");
    cat.entry(|e| {
        e.name("Documenting Functions").notes(
            r##"
            Function documentation is supported in single- and multi-line formats by starting a comment with `|`.

            Single-line:

            ```haskell
            -- |The 'square' function squares an integer.
            square :: Integer -> Integer
            square x = x * x
            ```

            Multi-line:

            ```haskell
            {-|

              The 'square' function squares an integer.

              >>> square 3
              9

            -}
            ```

            Documentation after type signature:

            ```haskell
            square :: Integer -> Integer
            -- ^The `square` function squares an integer.
            square x = x * x
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Documenting Function Arguments").notes(
            r##"
            Individual function arguments may be documented.

            ```haskell
            f  :: Int      -- ^ The 'Int' argument
               -> Float    -- ^ The 'Float' argument
               -> IO ()    -- ^ The return value
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Documenting Classes").notes(
            r##"
            Class documentation, same syntax as function documentation.

            ```haskell
            -- |'C' class documentation....
            class C a where
              f :: a -> Int
              g :: Int -> a
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Documenting Class Functions").notes(
            r##"
            Class functions can be documented.

            ```haskell
            class C a where
              -- | This is the documentation for the 'f' method
              f :: a -> Int
              -- | This is the documentation for the 'g' method
              g :: Int -> a
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Documenting Types").notes(
            r##"
            Document individual types, same syntax as function documentation.

            ```haskell
            -- |'MyList' type documentation....
            data MyList a = Nil | Cons a MyList
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Documenting Data Constructors").notes(
            r##"
            Individual constructors can be documented.

            Prefix-style:

            ```haskell
            data T a b
              -- | This is the documentation for the 'C1' constructor
              = C1 a b
              -- | This is the documentation for the 'C2' constructor
              | C2 a b
            ```

            Inline-style:

            ```haskell
            data T a b
              = C1 a b  -- ^ This is the documentation for the 'C1' constructor
              | C2 a b  -- ^ This is the documentation for the 'C2' constructor
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Documenting Record Fields").notes(
            r##"
            Each record field can be documented.

            Prefix-style:

            ```haskell
            data R a b =
              R { -- | This is the documentation for the 'a' field
                  a :: a,
                  -- | This is the documentation for the 'b' field
                  b :: b
                }
            ```

            Inline-style:

            ```haskell
            data R a b =
              R { a :: a  -- ^ This is the documentation for the 'a' field
                , b :: b  -- ^ This is the documentation for the 'b' field
                }
            ```

            Note that documentation for the first occurence of a field is used for all other occurences of the field.
            "##,
        );
    });
}

fn export_markup(cat: &mut CategoryBuilder) {
    cat.id("Export Markup");
    cat.entry(|e| {
        e.name("Code Sections and Sub-sections").notes(
            r##"
            Control rendered layout by marking sections in the export list.

            Create nestable sections with:

            ```haskell
            -- *
            -- **
            -- ***
            -- etc...
            ```

            ```haskell
            module M
              ( -- * Types
                MyType()
              , MyOtherType(..)
                -- ** Smart Constructors
              , mkMyType
                -- ** Validators
              , validateMyOtherType
                -- * Re-Exports
              , module Control.Applicative
                -- | Some documentation not attached to a particular Haskell entity
              ) where
            ```
            "##,
        );
    });
}

fn headings(cat: &mut CategoryBuilder) {
    cat.id("Headings");
    cat.entry(|e| {
        e.name("Headings and Sub-headings in Documentation").notes(
            r##"
            Add headings within documentation blocks.

            Heading-level control with:

            ```haskell
            -- =
            -- ==
            -- ===
            -- etc...
            ```

            ```haskell
            -- | 'MyType' represents ....
            --
            -- = Heading Section
            -- ...
            --
            -- == Subheading Section
            --
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Callapsible Header Sections").notes(
            r##"
            Since 2.15.1, haddock has experimental support for collapsible headers.

            Wrap your header in underscores to make it collapsible:

            ```haskell
            -- === __Examples__
            -- Text that can be hidden.
            --
            -- ==== Hidden Examples Subheader
            -- This content will also be hidden when `Examples` is collapsed.
            ```
            "##,
        );
    });
}

fn references(cat: &mut CategoryBuilder) {
    cat.id("References");
    cat.entry(|e| {
        e.name("Named Documentation Chunks").notes(
            r##"
            Relocate a markup chunk by name.

            Create a named chunk:

            ```haskell
            -- $myNamedHaddockChunk
            -- This named chunk can include haddock markup like: `Control.Monad.State`
            ```

            And include elsewhere by name:

            ```haskell
            -- $myNamedHaddockChunk
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Anchors").notes(
            r##"
            Link to a named anchors across modules.

            Create a label in module A:

            ```haskell
            -- #myLabel#
            ```

            And link to it in module B:

            ```haskell
            -- A link to A#myLabel
            ```
            "##,
        );
    });
}

fn code_blocks(cat: &mut CategoryBuilder) {
    cat.id("Code Blocks");
    cat.entry(|e| {
        e.name("Syntax Highlighted Code Blocks").notes(
            r##"
            Code lines and blocks are supported.

            Create a code block:

            ```haskell
            -- @
            --   fibs = 0 : 1 : zipWith (+) fibs (tail fibs)
            -- @
            ```

            Create a code line:

            ```haskell
            -- > fibs = 0 : 1 : zipWith (+) fibs (tail fibs)
            ```
            "##,
        );
    });
}

fn repl_examples(cat: &mut CategoryBuilder) {
    cat.id("REPL Examples");
    cat.entry(|e| {
        e.name("Evaluated Output Examples").notes(
            r##"
            An input line of code followed by it's evaluated output.

            These examples can be verified with doctest.

            ```haskell
            -- >>> fibs !! 3
            -- 2
            ```
            "##,
        );
    });
}

fn properties(cat: &mut CategoryBuilder) {
    cat.id("Properties");
    cat.entry(|e| {
        e.name("Testable Properties").notes(
            r##"
            A property contains a quickcheck-testable declaration.

            These properties can be tested with doctest.

            ```haskell
            -- Idempotence:
            --
            -- prop> sort xs == ( sort . sort ) (xs :: [Int])
            ```
            "##,
        );
    });
}

fn hyperlinking(cat: &mut CategoryBuilder) {
    cat.id("Hyperlinking");
    cat.entry(|e| {
        e.name("Module, Function, and Type Hyperlinks").notes(
            r##"
            Locatable modules, types and functions can be hyperlinked.

            ```haskell
            -- Local hyperlinks: "My.Module", 'MyType', 'mkMyType'
            -- Unqualified hyperlinks: "Prelude", 'Int', 'sort'
            -- Fully-qualified hyperlinks: "Data.Tree", 'Data.Tree.Tree', 'Data.Containers.ListUtils.nubOrd'
            ```
            "##,
        );
    });
}

fn text_markup(cat: &mut CategoryBuilder) {
    cat.id("Text Markup");
    cat.entry(|e| {
        e.name("Emphasis").notes(
            r##"
            Add emphasis to text:

            ```haskell
            -- Some /emphasized text/
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Bolding").notes(
            r##"
            Make text bold:

            ```haskell
            -- Some __bolded text__
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Monospacing").notes(
            r##"
            Make text monospaced:

            ```haskell
            -- Some @monospace text@
            ```
            "##,
        );
    });
}

fn external_references(cat: &mut CategoryBuilder) {
    cat.id("External References");
    cat.entry(|e| {
        e.name("Links").notes(
            r##"
            Create hyperlink anchors to external resources:

            ```haskell
            -- A raw url <http://example.com>
            -- A local file url <file:///Users/myname/.ghci>
            ```

            Hyperlinks with alternative link text:

            ```haskell
            -- A [renamed link](http://example.com)
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Images").notes(
            r##"
            Embed external images:

            ```haskell
            -- ![some description text](imagepath.png)
            ```
            "##,
        );
    });
}

fn lists(cat: &mut CategoryBuilder) {
    cat.id("Lists");
    cat.entry(|e| {
        e.name("Unordered Lists").notes(
            r##"
            Create unordered lists with `*` and `-`:

            ```haskell
            -- * first list item
            -- * second list item
            ```

            ```haskell
            -- - first list item
            -- - second list item
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Ordered Lists").notes(
            r##"
            Order lists with `(n)` or `n.`:

            ```haskell
            -- (1) first numbered list item
            -- (2) second numbered list item
            ```

            ```haskell
            -- 1. first numbered list item
            -- 2. second numbered list item
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Definition Lists").notes(
            r##"
            Create definition lists with `[]` syntax:

            ```haskell
            -- [thingone] thingone value
            -- [@thingtwo@] thingtwo value
            ```
            "##,
        );
    });
    cat.entry(|e| {
        e.name("Advanced Nesting of Lists").notes(
            r##"
            Haddock supports advanced nesting of lists:

            ```haskell
            {-|
            * Beginning of list
            This belongs to the list above!

                > nested
                > bird
                > tracks

                * Next list
                More of the indented list.

                    * Deeper

                        @
                        even code blocks work
                        @

                        * Deeper

                                1. Even deeper!
                                2. No newline separation even in indented lists.
            -}
            ```
            "##,
        );
    });
}

fn math(cat: &mut CategoryBuilder) {
    cat.id("Custom Math and LaTeX");
    cat.entry(|e| {
        e.name("LaTeX with MathJax").notes(
            r##"
            Multi-line LaTeX markup via `\[...\]`:

            ```haskell
            -- \[
            --    f(a) = \frac{1}{2\pi i}\oint_\gamma \frac{f(z)}{z-a}\,\mathrm{d}z
            -- \]
            ```

            Inline LaTeX markup via `\(...\)`:

            ```haskell
            -- A simple inline example: \(sum_{n=1}^{\infty} 2^{-n} = 1\)
            ```

            If the output format supports it, mathematics notation will be rendered within the document, e.g. via MathJax within HTML.
            "##,
        );
    });
}

fn metadata(cat: &mut CategoryBuilder) {
    cat.id("Metadata");
    cat.entry(|e| {
        e.name("Since").notes(
            r##"
            Recent haddock version support the `since` metadata tag for documenting the version in which a documentable entity was introduced.

            ```haskell
            -- @since 3.14.42
            ```
            "##,
        );
    });
}

fn grids_and_tables(cat: &mut CategoryBuilder) {
    cat.id("Grids and Tables");
    cat.entry(|e| {
        e.name("Layout").notes(
            r##"
            Tables supporting internal markup rendering:

            ```haskell
            {-

            +------------------------+------------+----------+----------+
            | Header row, column 1   | Header 2   | Header 3 | Header 4 |
            | (header rows optional) |            |          |          |
            +========================+============+==========+==========+
            | body row 1, column 1   | column 2   | column 3 | column 4 |
            +------------------------+------------+----------+----------+
            | body row 2             | Cells may span columns.          |
            +------------------------+------------+---------------------+
            | body row 3             | Cells may  | \[                  |
            +------------------------+ span rows. | f(n) = \sum_{i=1}   |
            | body row 4             |            | \]                  |
            +------------------------+------------+---------------------+

            -}
            ```
            "##,
        );
    });
}

fn configuration(cat: &mut CategoryBuilder) {
    cat.id("Configuration");
    cat.entry(|e| {
        e.name("Local Haddock Options").notes(
            r##"
            Module-wide attributes can control haddocks layout and mangling.

            Hide a module from haddock:

            ```haskell
            {-# OPTIONS_HADDOCK hide #-}
            ```

            Omit undocumented definitions:

            ```haskell
            {-# OPTIONS_HADDOCK prune #-}
            ```

            Ignore the explicit export list and document all top-level entities:

            ```haskell
            {-# OPTIONS_HADDOCK ignore-exports #-}
            ```

            Do not treat the module as the "home" of the entities it exports:

            ```haskell
            {-# OPTIONS_HADDOCK not-home #-}
            ```

            Show all language extensions:

            ```haskell
            {-# OPTIONS_HADDOCK show-extensions #-}
            ```
            "##,
        );
    });
}
