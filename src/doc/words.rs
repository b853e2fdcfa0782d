/*!
# Word Reference

Stack effects are written `( before -- after )` with the top of the stack
rightmost.

| Word | Effect | Notes |
|------|--------|-------|
| `+` | `( a b -- a+b )` | Also joins two strings. |
| `-` `*` | `( a b -- c )` | |
| `/` | `( a b -- c )` | Always a float. |
| `//` | `( a b -- c )` | Floor division. |
| `%` | `( a b -- c )` | Sign follows `b`. |
| `**` | `( a b -- c )` | Float when `b` is a negative integer. |
| `&` `\|` `^` `<<` `>>` | `( a b -- c )` | Integers only. |
| `int` `float` `str` `bool` | `( a -- b )` | Conversions. |
| `~` | `( a -- b )` | Bitwise not. |
| `not` | `( a -- b )` | Logical not. |
| `=` `!=` `<` `<=` `>` `>=` | `( a b -- flag )` | |
| `and` `or` | `( a b -- flag )` | Both sides are already evaluated. |
| `drop` | `( a -- )` | |
| `dup` | `( a -- a a )` | |
| `swap` | `( a b -- b a )` | |
| `rot` | `( a b c -- b c a )` | |
| `.` | `( a -- )` | Print. |
| `.s` | `( -- )` | Print the stack. |
| `defs` | `( -- )` | Print the definitions in scope. |
| `{` `}` | `( -- q )` | Capture a quotation. |
| `define` | `( value name -- )` | |
| `do` | `( q -- )` | |
| `if` | `( flag q -- flag )` | |
| `ifelse` | `( flag q1 q2 -- flag )` | Runs `q1` when true, else `q2`. |
| `while` | `( flag q -- flag )` | Runs `q` while the top of the stack is true. |
| `dowhile` | `( q -- )` | Runs `q` once, then as `while`. |

## Errors

| Message | Cause |
|---------|-------|
| `STACK UNDERFLOW` | Not enough values on the stack. |
| `UNKNOWN TOKEN` | Not a literal, builtin or definition. |
| `TYPE ERROR` | Wrong kind of value for the word. |
| `ARITHMETIC ERROR` | Division by zero, overflow or a bad conversion. |
| `UNMATCHED BRACE` | `}` without `{`. |
| `NESTING TOO DEEP` | Quotations running inside each other past the limit. |
| `BREAK` | Interrupted with CTRL-C. |
*/
