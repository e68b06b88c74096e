/*!
# `BOOKMARK <label>`

## Purpose
Define a label at the current position.

## Example
```text
bookmark top
```
```text
top:
```

*/
