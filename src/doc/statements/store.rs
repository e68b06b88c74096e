/*!
# `STORE <value> IN <variable> [AS <type>]`

## Purpose
Put a value into a variable, an array element or a memory location.

## Remarks
The type after `AS` is optional and ignored except for `AS ARRAY`.

| Form | Effect |
|------|--------|
| `store 1, 2, 3 in t as array` | Create array `t` with three elements. |
| `store t's array value 2 in e` | Copy the second element of `t`, counting from 1. |
| `store 7 in t[0]` | Set the first element of `t`, counting from 0. |
| `store memory d020 in x` | Read the byte at `$D020`. |
| `store 5 in memory d020` | Write the byte at `$D020`. |
| `store x + 1 in y` | Evaluate an expression. |

Array indexes must be literal numbers and are not checked against the
array size.

## Example
```text
store 5 in x as number
```
```text
LDA #5
STA $0200
```

*/
