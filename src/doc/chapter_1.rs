/*!
# Variables and Expressions

A variable is created the first time any statement mentions it. It gets
the next free address starting at `$0200` and keeps it for the whole
compile. Names may contain letters, digits and underbars (_) and are at
most 31 characters long.

Arrays are created the same way. The first statement that mentions an
array decides its size, and the size never changes afterwards.

```text
store 1, 2, 3 in t as array   ' t is three bytes at $0200
store 9 in x as number        ' x is at $0203
```

At most 256 variables and arrays fit in one compile.

## Expressions

An expression is a single value or two values joined by one operator.
A value starting with a digit is a literal number. Anything else is a
variable.

| Operator | Meaning | Notes |
|----------|---------|-------|
| `+` | Addition | |
| `-` | Subtraction | |
| `*` | Multiplication | On the 6502 only multiplying by 40 is supported. |
| `/` | Division | On the 6502 a call marker is written instead. |
| `%` | Modulus | Not yet supported; a marker is written instead. |

Only the first operator counts. `x + 1 + 2` adds 1 to x.
There are no negative literals, so `-5` is an error.
*/
